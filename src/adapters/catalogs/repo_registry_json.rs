//! Product repository registry loaded from JSON.

use std::collections::BTreeMap;
use std::path::Path;

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::repo::product_of_reference;
use crate::domain::{AppError, BoxDescriptor, ProductSpec, RepoDescriptor};
use crate::ports::RepoRegistry;

static CATALOG_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

/// Version picked when the product specification does not name one.
const LATEST_VERSION: &str = "latest";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProductEntry {
    #[serde(default)]
    recipe: Option<String>,
    #[serde(default)]
    attribute: Option<String>,
    #[serde(default)]
    repos: Vec<RepoEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RepoEntry {
    version: String,
    platform: String,
    platform_version: String,
    repo: String,
    #[serde(default)]
    repo_key: Option<String>,
}

/// Registry of products, their recipes, and their package repositories.
#[derive(Debug, Default)]
pub struct JsonRepoRegistry {
    products: BTreeMap<String, ProductEntry>,
    repos: BTreeMap<String, RepoDescriptor>,
}

impl JsonRepoRegistry {
    /// Load the registry from a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!(
                "Unable to read repository registry {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Registry shipped with the binary, covering products installed without repositories.
    pub fn embedded() -> Result<Self, AppError> {
        let content = CATALOG_DIR
            .get_file("products.json")
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::config_error("Embedded product registry is missing"))?;
        Self::from_json(content)
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let products: BTreeMap<String, ProductEntry> =
            serde_json::from_str(content).map_err(|e| AppError::ParseError {
                what: "repository registry".to_string(),
                details: e.to_string(),
            })?;

        let mut repos = BTreeMap::new();
        for (product, entry) in &products {
            for repo in &entry.repos {
                let descriptor = RepoDescriptor {
                    product: product.clone(),
                    version: repo.version.clone(),
                    platform: repo.platform.clone(),
                    platform_version: repo.platform_version.clone(),
                    repo: repo.repo.clone(),
                    repo_key: repo.repo_key.clone(),
                };
                repos.insert(descriptor.key(), descriptor);
            }
        }

        Ok(Self { products, repos })
    }
}

impl RepoRegistry for JsonRepoRegistry {
    fn known_repo(&self, reference: &str) -> bool {
        self.repos.contains_key(reference)
    }

    fn get_repo(&self, reference: &str) -> Option<RepoDescriptor> {
        self.repos.get(reference).cloned()
    }

    fn product_name(&self, reference: &str) -> String {
        product_of_reference(reference).to_string()
    }

    fn known_product(&self, product: &str) -> bool {
        self.products.contains_key(product)
    }

    fn requires_repo(&self, product: &str) -> bool {
        self.products.get(product).is_some_and(|entry| !entry.repos.is_empty())
    }

    fn recipe_name(&self, product: &str) -> String {
        self.products
            .get(product)
            .and_then(|entry| entry.recipe.clone())
            .unwrap_or_else(|| product.to_string())
    }

    fn attribute_name(&self, product: &str) -> String {
        self.products
            .get(product)
            .and_then(|entry| entry.attribute.clone())
            .unwrap_or_else(|| product.to_string())
    }

    fn find_repo(
        &self,
        product: &str,
        spec: &ProductSpec,
        descriptor: &BoxDescriptor,
    ) -> Option<RepoDescriptor> {
        let version = spec.version.as_deref().unwrap_or(LATEST_VERSION);
        self.repos
            .values()
            .find(|repo| {
                repo.product == product
                    && repo.version == version
                    && repo.platform == descriptor.platform
                    && repo.platform_version == descriptor.platform_version
            })
            .cloned()
    }
}
