//! Test doubles for machine sizing ports.

use std::sync::Mutex;

use crate::domain::{AppError, MachineType, NodeRequirements};
use crate::ports::{DeviceNameLookup, MachineTypeSelector};

/// Returns the first candidate sized exactly as requested, or fails when `fail` is set.
#[derive(Default)]
pub struct FakeMachineTypes {
    pub calls: Mutex<Vec<(Vec<String>, NodeRequirements)>>,
    pub fail: bool,
}

impl FakeMachineTypes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl MachineTypeSelector for FakeMachineTypes {
    fn choose_instance_type(
        &self,
        candidates: &[String],
        requirements: &NodeRequirements,
    ) -> Result<MachineType, AppError> {
        self.calls.lock().unwrap().push((candidates.to_vec(), *requirements));
        if self.fail {
            return Err(AppError::NoMachineType {
                candidates: candidates.join(", "),
                cpu_count: requirements.cpu_count,
                memory_size: requirements.memory_size,
            });
        }
        Ok(MachineType {
            name: candidates.first().cloned().unwrap_or_else(|| "t2.micro".to_string()),
            cpu_count: requirements.cpu_count,
            memory_size: requirements.memory_size,
        })
    }
}

/// Answers every lookup with the same device name.
#[derive(Default)]
pub struct FakeDeviceNames {
    pub device_name: Option<String>,
}

impl FakeDeviceNames {
    pub fn with(device_name: &str) -> Self {
        Self { device_name: Some(device_name.to_string()) }
    }
}

impl DeviceNameLookup for FakeDeviceNames {
    fn device_name_for_ami(&self, _ami: &str) -> Option<String> {
        self.device_name.clone()
    }
}
