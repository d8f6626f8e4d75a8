//! Box catalog port definition.

use crate::domain::BoxDescriptor;

/// Read-only lookup of box descriptors.
pub trait BoxCatalog {
    /// Get a box by identifier.
    fn get_box(&self, name: &str) -> Option<&BoxDescriptor>;

    /// All box identifiers sorted by name.
    fn names(&self) -> Vec<&str>;
}
