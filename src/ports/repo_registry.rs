//! Product repository registry port definition.

use crate::domain::{BoxDescriptor, ProductSpec, RepoDescriptor};

/// Knowledge about installable products and their package repositories.
pub trait RepoRegistry {
    /// Whether a named repository reference (`product@version+platform^platform_version`) exists.
    fn known_repo(&self, reference: &str) -> bool;

    fn get_repo(&self, reference: &str) -> Option<RepoDescriptor>;

    /// Product a named repository reference belongs to.
    fn product_name(&self, reference: &str) -> String;

    fn known_product(&self, product: &str) -> bool;

    /// Whether the product is installed from a package repository at all.
    fn requires_repo(&self, product: &str) -> bool;

    /// Chef recipe installing the product.
    fn recipe_name(&self, product: &str) -> String;

    /// Attribute namespace of the product in the role.
    fn attribute_name(&self, product: &str) -> String;

    /// Repository matching the product version and the box platform.
    fn find_repo(
        &self,
        product: &str,
        spec: &ProductSpec,
        descriptor: &BoxDescriptor,
    ) -> Option<RepoDescriptor>;
}
