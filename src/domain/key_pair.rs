//! Cloud SSH key pair shared by all nodes of a run.

use std::path::Path;

use crate::domain::identities::validation::sanitize_resource_name;

/// Marker file holding the key pair name.
pub const KEY_PAIR_MARKER: &str = "keypair";

/// Key pair created by the key pair service.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub name: String,
    /// Private key content.
    pub material: String,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Deterministic key pair name so reruns on the same host and path are recognisable.
pub fn key_pair_name(configuration_id: &str, config_path: &Path, host_machine: &str) -> String {
    let basename = config_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "configuration".to_string());
    sanitize_resource_name(&format!("mdbci-{}-{}-{}", configuration_id, basename, host_machine))
}

pub fn private_key_file_name(key_name: &str) -> String {
    format!("{}.pem", key_name)
}
