pub mod assets;
pub mod aws_cli;
pub mod catalogs;
pub mod filesystem;

pub use assets::TemplateEngine;
pub use aws_cli::AwsCliAdapter;
pub use catalogs::{EmbeddedInstanceTypes, JsonBoxCatalog, JsonRepoRegistry};
pub use filesystem::FilesystemConfigDirectory;
