//! Filesystem adapter for the configuration directory port.
//!
//! `FilesystemConfigDirectory` owns the directory path and rejects file names that
//! would resolve outside of it.

mod config_directory;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed configuration directory.
#[derive(Debug, Clone)]
pub struct FilesystemConfigDirectory {
    root: PathBuf,
}

impl FilesystemConfigDirectory {
    /// Create an adapter for `root`. Relative paths are resolved against the current directory.
    pub fn new(root: &Path) -> Result<Self, AppError> {
        let root = match root.is_absolute() {
            true => root.to_path_buf(),
            false => std::env::current_dir()?.join(root),
        };
        Ok(Self { root: normalize_path(&root) })
    }

    fn resolve(&self, name: &str) -> Result<PathBuf, AppError> {
        let full_path = normalize_path(&self.root.join(name));
        if full_path == self.root || !full_path.starts_with(&self.root) {
            return Err(AppError::InvalidPath(name.to_string()));
        }
        Ok(full_path)
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut ret = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            Component::Prefix(..) | Component::RootDir => {
                ret.push(component.as_os_str());
            }
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => {
                ret.push(c);
            }
        }
    }
    ret
}
