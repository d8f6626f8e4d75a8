//! Product repository descriptors.

use serde::{Deserialize, Serialize};

/// Package repository for one product version on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepoDescriptor {
    pub product: String,
    pub version: String,
    pub platform: String,
    pub platform_version: String,
    /// Repository URL.
    pub repo: String,
    #[serde(default)]
    pub repo_key: Option<String>,
}

impl RepoDescriptor {
    /// Registry key used by named repository references:
    /// `product@version+platform^platform_version`.
    pub fn key(&self) -> String {
        format!("{}@{}+{}^{}", self.product, self.version, self.platform, self.platform_version)
    }
}

/// Product part of a named repository reference.
pub fn product_of_reference(reference: &str) -> &str {
    reference.split('@').next().unwrap_or(reference)
}
