pub mod box_catalog_json;
pub mod instance_types_embedded;
pub mod repo_registry_json;

pub use self::box_catalog_json::JsonBoxCatalog;
pub use self::instance_types_embedded::EmbeddedInstanceTypes;
pub use self::repo_registry_json::JsonRepoRegistry;
