//! Inputs and results of the generate command.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::domain::config::{AwsConfig, NetworkConfig};
use crate::domain::{AppError, KeyPair, NodeWarning, ProviderKind};

/// Kind of master file produced for the configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `Vagrantfile`, for every provider.
    #[default]
    Vagrant,
    /// `infrastructure.tf`, cloud templates only.
    Terraform,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Vagrant => "vagrant",
            OutputFormat::Terraform => "terraform",
        }
    }

    /// Name of the master file in the configuration directory.
    pub fn master_file_name(&self) -> &'static str {
        match self {
            OutputFormat::Vagrant => "Vagrantfile",
            OutputFormat::Terraform => "infrastructure.tf",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vagrant" => Ok(OutputFormat::Vagrant),
            "terraform" => Ok(OutputFormat::Terraform),
            other => Err(AppError::UnknownFormat(other.to_string())),
        }
    }
}

/// Options for the generate command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Absolute path of the template, recorded in the `template` marker.
    pub template_path: PathBuf,
    /// Replace an existing configuration directory.
    pub override_existing: bool,
    /// CPU count forced for every node.
    pub cpu_count: Option<u64>,
    /// Attach `qemu` nodes to the host bridge.
    pub public_network: bool,
    pub format: OutputFormat,
}

/// Run-wide settings that do not come from the command line.
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub host_machine: String,
    pub username: String,
    /// Identifier embedded into the key pair name.
    pub configuration_id: String,
    pub aws: AwsConfig,
    pub network: NetworkConfig,
    /// Timestamp written into generated file headers.
    pub created_at: String,
}

/// Result of a successful generation.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub configuration_path: PathBuf,
    pub provider: ProviderKind,
    pub master_file: String,
    /// Generated nodes, in template order.
    pub nodes: Vec<String>,
    /// Nodes left out of the configuration.
    pub warnings: Vec<NodeWarning>,
    pub key_pair: Option<KeyPair>,
}
