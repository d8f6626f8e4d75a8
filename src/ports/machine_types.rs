//! Cloud machine sizing port definitions.

use crate::domain::{AppError, MachineType, NodeRequirements};

/// Picks the instance type for a cloud node.
pub trait MachineTypeSelector {
    /// Choose among `candidates` the type that satisfies `requirements`.
    ///
    /// Selection is deterministic, callers must not retry.
    fn choose_instance_type(
        &self,
        candidates: &[String],
        requirements: &NodeRequirements,
    ) -> Result<MachineType, AppError>;
}

/// Maps an AMI to the device name of its root volume.
pub trait DeviceNameLookup {
    fn device_name_for_ami(&self, ami: &str) -> Option<String>;
}
