//! Test double for `ConfigDirectory`.

use std::path::Path;
use std::sync::Mutex;

use crate::adapters::FilesystemConfigDirectory;
use crate::domain::AppError;
use crate::ports::ConfigDirectory;

/// Real directory that fails writing one named file and counts removals.
///
/// Files named with [`FailingConfigDirectory::reporting_existing`] are reported as present
/// even though nothing was written.
pub struct FailingConfigDirectory {
    inner: FilesystemConfigDirectory,
    fail_on: Option<String>,
    existing: Vec<String>,
    pub written: Mutex<Vec<String>>,
    pub removals: Mutex<usize>,
}

impl FailingConfigDirectory {
    pub fn new(root: &Path) -> Self {
        Self {
            inner: FilesystemConfigDirectory::new(root).unwrap(),
            fail_on: None,
            existing: Vec::new(),
            written: Mutex::new(Vec::new()),
            removals: Mutex::new(0),
        }
    }

    pub fn failing_on(root: &Path, name: &str) -> Self {
        Self { fail_on: Some(name.to_string()), ..Self::new(root) }
    }

    pub fn reporting_existing(root: &Path, name: &str) -> Self {
        Self { existing: vec![name.to_string()], ..Self::new(root) }
    }

    pub fn written(&self) -> Vec<String> {
        self.written.lock().unwrap().clone()
    }

    pub fn removals(&self) -> usize {
        *self.removals.lock().unwrap()
    }

    fn check(&self, name: &str) -> Result<(), AppError> {
        if self.fail_on.as_deref() == Some(name) {
            return Err(AppError::from(std::io::Error::other(format!(
                "disk full while writing {}",
                name
            ))));
        }
        self.written.lock().unwrap().push(name.to_string());
        Ok(())
    }
}

impl ConfigDirectory for FailingConfigDirectory {
    fn path(&self) -> &Path {
        self.inner.path()
    }

    fn exists(&self) -> bool {
        self.inner.exists()
    }

    fn create(&self) -> Result<(), AppError> {
        self.inner.create()
    }

    fn remove(&self) -> Result<(), AppError> {
        *self.removals.lock().unwrap() += 1;
        self.inner.remove()
    }

    fn file_exists(&self, name: &str) -> bool {
        self.existing.iter().any(|existing| existing == name) || self.inner.file_exists(name)
    }

    fn write_file(&self, name: &str, content: &str) -> Result<(), AppError> {
        self.check(name)?;
        self.inner.write_file(name, content)
    }

    fn write_private_file(&self, name: &str, content: &str) -> Result<(), AppError> {
        self.check(name)?;
        self.inner.write_private_file(name, content)
    }
}
