//! Box catalog entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Provider family a box targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum ProviderKind {
    /// Local hypervisor (`libvirt`).
    #[serde(rename = "libvirt")]
    LocalHypervisor,
    /// Hypervisor with network fabric settings (`qemu`).
    #[serde(rename = "qemu")]
    NetworkVirtualization,
    /// Cloud virtual machines (`aws`).
    #[serde(rename = "aws")]
    Cloud,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::LocalHypervisor => "libvirt",
            ProviderKind::NetworkVirtualization => "qemu",
            ProviderKind::Cloud => "aws",
        }
    }

    pub fn is_cloud(&self) -> bool {
        matches!(self, ProviderKind::Cloud)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "libvirt" => Ok(ProviderKind::LocalHypervisor),
            "qemu" => Ok(ProviderKind::NetworkVirtualization),
            "aws" => Ok(ProviderKind::Cloud),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

/// Static description of a box.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BoxDescriptor {
    pub provider: ProviderKind,
    #[serde(default)]
    pub platform: String,
    #[serde(default)]
    pub platform_version: String,
    /// Vagrant box name or image URL.
    #[serde(rename = "box", default)]
    pub box_image: Option<String>,
    #[serde(default)]
    pub ami: Option<String>,
    #[serde(default)]
    pub default_instance_type: Option<String>,
    #[serde(default)]
    pub supported_instance_types: Vec<String>,
    #[serde(default)]
    pub default_cpu_count: Option<u64>,
    /// SSH user the box expects.
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub ssh_pty: bool,
    #[serde(default)]
    pub driver: Option<String>,
}

impl BoxDescriptor {
    /// Minimal descriptor for the given provider, mostly useful in tests.
    pub fn new(provider: ProviderKind, platform: &str, platform_version: &str) -> Self {
        Self {
            provider,
            platform: platform.to_string(),
            platform_version: platform_version.to_string(),
            box_image: None,
            ami: None,
            default_instance_type: None,
            supported_instance_types: Vec::new(),
            default_cpu_count: None,
            user: None,
            ssh_pty: false,
            driver: None,
        }
    }

    /// Instance types offered to the machine type selector.
    pub fn instance_type_candidates(&self) -> Vec<String> {
        if !self.supported_instance_types.is_empty() {
            return self.supported_instance_types.clone();
        }
        self.default_instance_type.iter().cloned().collect()
    }
}
