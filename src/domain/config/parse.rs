//! Pure parse/validate for generator configuration (`config.toml`).

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::domain::AppError;
use crate::domain::config::GeneratorConfig;

/// Parse and validate generator configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<GeneratorConfig, AppError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    if config.configuration_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
        return Err(AppError::config_error("configuration_id must not be empty"));
    }
    if config.aws.region.trim().is_empty() {
        return Err(AppError::config_error("aws.region must not be empty"));
    }
    Ok(config)
}

/// Short stable identifier derived from the generating host and the configuration path.
pub fn configuration_fingerprint(host_machine: &str, config_path: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(host_machine.as_bytes());
    hasher.update(b"\0");
    hasher.update(config_path.to_string_lossy().as_bytes());
    let digest = hasher.finalize();
    digest.iter().take(4).map(|byte| format!("{:02x}", byte)).collect()
}

impl GeneratorConfig {
    /// Configured identifier, or the fingerprint of host and path.
    pub fn configuration_id(&self, host_machine: &str, config_path: &Path) -> String {
        self.configuration_id
            .clone()
            .unwrap_or_else(|| configuration_fingerprint(host_machine, config_path))
    }
}
