//! Resolved per-node parameters and the precedence rules that produce them.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::domain::identities::NodeName;
use crate::domain::template::{DEFAULT_MEMORY_SIZE, NodeSpec};
use crate::domain::{BoxDescriptor, ProviderKind};

pub const DEFAULT_CPU_COUNT: u64 = 1;
pub const DEFAULT_DRIVER: &str = "kvm";
pub const DEFAULT_CLOUD_USER: &str = "ec2-user";

/// Instance type chosen for a cloud node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineType {
    pub name: String,
    pub cpu_count: u64,
    pub memory_size: u64,
}

/// Hardware a node asks for, passed to the machine type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeRequirements {
    pub cpu_count: u64,
    pub memory_size: u64,
}

/// Run-wide values every node resolution sees.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    /// Name of the machine running the generator.
    pub host_machine: &'a str,
    pub username: &'a str,
    /// Absolute path of the configuration directory.
    pub config_path: &'a Path,
    /// CPU count forced for every node.
    pub cpu_override: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HypervisorParams {
    pub box_image: String,
    pub platform: String,
    pub platform_version: String,
    pub ssh_pty: bool,
    pub template_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    pub box_image: String,
    pub platform: String,
    pub platform_version: String,
    pub driver: String,
    pub ssh_pty: bool,
    pub template_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudParams {
    pub ami: String,
    pub machine_type: MachineType,
    /// Root device of the AMI. Absent means no block device mapping.
    pub device_name: Option<String>,
    pub user: String,
    pub ssh_pty: bool,
    pub vpc: bool,
    pub tags: BTreeMap<String, String>,
}

/// Provider-specific half of the resolved parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderParams {
    LocalHypervisor(HypervisorParams),
    NetworkVirtualization(NetworkParams),
    Cloud(CloudParams),
}

impl ProviderParams {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderParams::LocalHypervisor(_) => ProviderKind::LocalHypervisor,
            ProviderParams::NetworkVirtualization(_) => ProviderKind::NetworkVirtualization,
            ProviderParams::Cloud(_) => ProviderKind::Cloud,
        }
    }
}

/// Fully resolved node, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedNode {
    pub name: NodeName,
    pub host: String,
    pub memory_size: u64,
    pub cpu_count: u64,
    pub provider: ProviderParams,
}

pub fn resolve_memory_size(spec: &NodeSpec) -> u64 {
    spec.memory_size.unwrap_or(DEFAULT_MEMORY_SIZE)
}

/// Run-wide override, then node value, then box default, then one CPU.
pub fn resolve_cpu_count(
    cpu_override: Option<u64>,
    spec: &NodeSpec,
    descriptor: &BoxDescriptor,
) -> u64 {
    cpu_override.or(spec.cpu_count).or(descriptor.default_cpu_count).unwrap_or(DEFAULT_CPU_COUNT)
}

pub fn resolve_host(name: &NodeName, spec: &NodeSpec) -> String {
    match spec.hostname.as_deref() {
        Some(hostname) if !hostname.is_empty() => hostname.to_string(),
        _ => name.to_string(),
    }
}

/// Vagrant box for hypervisor providers, falling back to the box identifier.
pub fn resolve_box_image(box_name: &str, descriptor: &BoxDescriptor) -> String {
    descriptor.box_image.clone().unwrap_or_else(|| box_name.to_string())
}

pub fn resolve_driver(descriptor: &BoxDescriptor) -> String {
    descriptor.driver.clone().unwrap_or_else(|| DEFAULT_DRIVER.to_string())
}

pub fn resolve_cloud_user(descriptor: &BoxDescriptor) -> String {
    descriptor.user.clone().unwrap_or_else(|| DEFAULT_CLOUD_USER.to_string())
}

/// Ownership tags attached to every cloud instance.
pub fn cloud_tags(name: &NodeName, ctx: &ResolutionContext<'_>) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("hostname".to_string(), ctx.host_machine.to_string()),
        ("username".to_string(), ctx.username.to_string()),
        ("machinename".to_string(), name.to_string()),
        ("full_config_path".to_string(), ctx.config_path.display().to_string()),
    ])
}
