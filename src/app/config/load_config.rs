//! Generator configuration loading.

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::config::{GeneratorConfig, parse_config_content};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "MDBCI_CONFIG";

/// Where the configuration file is looked up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named on the command line or in `MDBCI_CONFIG`; must exist.
    Explicit(PathBuf),
    /// `$HOME/.config/mdbci/config.toml`; defaults apply when absent.
    Default(PathBuf),
    /// No home directory, defaults apply.
    None,
}

/// `$HOME/.config/mdbci`.
pub fn default_config_dir<F>(env: F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    env("HOME").filter(|home| !home.is_empty()).map(|home| {
        Path::new(&home).join(".config").join("mdbci")
    })
}

/// Decide which configuration file applies: the command line, then `MDBCI_CONFIG`,
/// then the per-user default.
pub fn locate_config<F>(explicit: Option<&Path>, env: F) -> ConfigSource
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }
    if let Some(path) = env(CONFIG_ENV).filter(|value| !value.is_empty()) {
        return ConfigSource::Explicit(PathBuf::from(path));
    }
    match default_config_dir(env) {
        Some(dir) => ConfigSource::Default(dir.join("config.toml")),
        None => ConfigSource::None,
    }
}

/// Load the generator configuration from `source`.
pub fn load_config(source: &ConfigSource) -> Result<GeneratorConfig, AppError> {
    let path = match source {
        ConfigSource::Explicit(path) => {
            if !path.is_file() {
                return Err(AppError::config_error(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            path
        }
        ConfigSource::Default(path) => {
            if !path.is_file() {
                log::debug!("No configuration at {}, using defaults", path.display());
                return Ok(GeneratorConfig::default());
            }
            path
        }
        ConfigSource::None => return Ok(GeneratorConfig::default()),
    };

    log::debug!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    parse_config_content(&content)
}
