use crate::adapters::TemplateEngine;
use crate::ports::{
    BoxCatalog, DeviceNameLookup, KeyPairService, MachineTypeSelector, RepoRegistry,
};

/// Application context holding the collaborators of a generation run.
pub struct AppContext<'a> {
    boxes: &'a dyn BoxCatalog,
    repos: &'a dyn RepoRegistry,
    machine_types: &'a dyn MachineTypeSelector,
    device_names: &'a dyn DeviceNameLookup,
    key_pairs: &'a dyn KeyPairService,
    templates: &'a TemplateEngine,
}

impl<'a> AppContext<'a> {
    /// Create a new application context.
    pub fn new(
        boxes: &'a dyn BoxCatalog,
        repos: &'a dyn RepoRegistry,
        machine_types: &'a dyn MachineTypeSelector,
        device_names: &'a dyn DeviceNameLookup,
        key_pairs: &'a dyn KeyPairService,
        templates: &'a TemplateEngine,
    ) -> Self {
        Self { boxes, repos, machine_types, device_names, key_pairs, templates }
    }

    pub fn boxes(&self) -> &dyn BoxCatalog {
        self.boxes
    }

    pub fn repos(&self) -> &dyn RepoRegistry {
        self.repos
    }

    pub fn machine_types(&self) -> &dyn MachineTypeSelector {
        self.machine_types
    }

    pub fn device_names(&self) -> &dyn DeviceNameLookup {
        self.device_names
    }

    pub fn key_pairs(&self) -> &dyn KeyPairService {
        self.key_pairs
    }

    /// Get a reference to the artifact template engine.
    pub fn templates(&self) -> &TemplateEngine {
        self.templates
    }
}
