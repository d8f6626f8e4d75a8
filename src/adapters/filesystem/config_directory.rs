//! `ConfigDirectory` implementation for `FilesystemConfigDirectory`.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ConfigDirectory;

use super::FilesystemConfigDirectory;

impl ConfigDirectory for FilesystemConfigDirectory {
    fn path(&self) -> &Path {
        &self.root
    }

    fn exists(&self) -> bool {
        self.root.exists()
    }

    fn create(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).map_err(AppError::from)
    }

    fn remove(&self) -> Result<(), AppError> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root).map_err(AppError::from)?;
        }
        Ok(())
    }

    fn file_exists(&self, name: &str) -> bool {
        self.resolve(name).map(|path| path.exists()).unwrap_or(false)
    }

    fn write_file(&self, name: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve(name)?;
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn write_private_file(&self, name: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve(name)?;
        fs::write(&full_path, content).map_err(AppError::from)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&full_path, fs::Permissions::from_mode(0o600))
                .map_err(AppError::from)?;
        }
        Ok(())
    }
}
