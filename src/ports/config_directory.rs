//! Configuration directory port definition.

use std::path::Path;

use crate::domain::AppError;

/// Output directory of one generation run.
///
/// File names are relative to the directory root.
pub trait ConfigDirectory {
    /// Absolute path of the directory.
    fn path(&self) -> &Path;

    fn exists(&self) -> bool;

    /// Create the directory (and missing parents).
    fn create(&self) -> Result<(), AppError>;

    /// Delete the directory with everything in it. Missing directories are not an error.
    fn remove(&self) -> Result<(), AppError>;

    fn file_exists(&self, name: &str) -> bool;

    fn write_file(&self, name: &str, content: &str) -> Result<(), AppError>;

    /// Write a file readable only by the owner.
    fn write_private_file(&self, name: &str, content: &str) -> Result<(), AppError>;
}
