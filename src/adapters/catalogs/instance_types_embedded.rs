//! Machine type selection backed by the embedded instance type table.

use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::domain::{AppError, MachineType, NodeRequirements};
use crate::ports::MachineTypeSelector;

static CATALOG_DIR: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/catalog");

#[derive(Debug, Clone, Deserialize)]
struct InstanceTypeEntry {
    name: String,
    cpu_count: u64,
    memory_size: u64,
}

/// Chooses the smallest known instance type that fits a node.
#[derive(Debug)]
pub struct EmbeddedInstanceTypes {
    types: Vec<InstanceTypeEntry>,
}

impl EmbeddedInstanceTypes {
    pub fn new() -> Result<Self, AppError> {
        let content = CATALOG_DIR
            .get_file("instance_types.json")
            .and_then(|file| file.contents_utf8())
            .ok_or_else(|| AppError::config_error("Embedded instance type table is missing"))?;
        let types = serde_json::from_str(content).map_err(|e| AppError::ParseError {
            what: "instance type table".to_string(),
            details: e.to_string(),
        })?;
        Ok(Self { types })
    }
}

impl MachineTypeSelector for EmbeddedInstanceTypes {
    fn choose_instance_type(
        &self,
        candidates: &[String],
        requirements: &NodeRequirements,
    ) -> Result<MachineType, AppError> {
        self.types
            .iter()
            .filter(|entry| candidates.is_empty() || candidates.contains(&entry.name))
            .filter(|entry| {
                entry.cpu_count >= requirements.cpu_count
                    && entry.memory_size >= requirements.memory_size
            })
            .min_by(|a, b| {
                (a.memory_size, a.cpu_count, &a.name).cmp(&(b.memory_size, b.cpu_count, &b.name))
            })
            .map(|entry| MachineType {
                name: entry.name.clone(),
                cpu_count: entry.cpu_count,
                memory_size: entry.memory_size,
            })
            .ok_or_else(|| AppError::NoMachineType {
                candidates: candidates.join(", "),
                cpu_count: requirements.cpu_count,
                memory_size: requirements.memory_size,
            })
    }
}
