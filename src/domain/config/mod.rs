//! Generator configuration model.

pub mod parse;

use std::path::PathBuf;

use serde::Deserialize;

pub use parse::{configuration_fingerprint, parse_config_content};

pub const DEFAULT_AWS_REGION: &str = "eu-west-1";
pub const DEFAULT_SECURITY_GROUP: &str = "default";
pub const DEFAULT_BRIDGE: &str = "virbr0";

/// Contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Identifier embedded into cloud resource names.
    pub configuration_id: Option<String>,
    /// Directory with box catalog JSON files.
    pub boxes_dir: Option<PathBuf>,
    /// Product repository registry JSON file.
    pub repos_file: Option<PathBuf>,
    pub aws: AwsConfig,
    pub network: NetworkConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AwsConfig {
    pub region: String,
    pub security_group: String,
    /// Named profile passed to the `aws` CLI.
    pub profile: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_AWS_REGION.to_string(),
            security_group: DEFAULT_SECURITY_GROUP.to_string(),
            profile: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetworkConfig {
    /// Host bridge used by the public network of `qemu` nodes.
    pub bridge: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { bridge: DEFAULT_BRIDGE.to_string() }
    }
}
