mod box_catalog;
mod config_directory;
mod key_pair_service;
mod machine_types;
mod repo_registry;

pub use box_catalog::BoxCatalog;
pub use config_directory::ConfigDirectory;
pub use key_pair_service::KeyPairService;
pub use machine_types::{DeviceNameLookup, MachineTypeSelector};
pub use repo_registry::RepoRegistry;
