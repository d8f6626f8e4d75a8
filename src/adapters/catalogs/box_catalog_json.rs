//! Box catalog loaded from JSON files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::domain::{AppError, BoxDescriptor};
use crate::ports::BoxCatalog;

/// Box catalog built from a directory of `*.json` files, each mapping box names to descriptors.
#[derive(Debug, Default)]
pub struct JsonBoxCatalog {
    boxes: BTreeMap<String, BoxDescriptor>,
}

impl JsonBoxCatalog {
    /// Load every JSON file in `dir`, in file name order.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        if !dir.is_dir() {
            return Err(AppError::config_error(format!(
                "Box catalog directory {} does not exist",
                dir.display()
            )));
        }

        let mut files = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
                files.push(path);
            }
        }
        files.sort();

        let mut catalog = Self::default();
        for path in files {
            let content = fs::read_to_string(&path)?;
            catalog.merge_json(&content, &path.display().to_string())?;
        }
        log::debug!("Loaded {} boxes from {}", catalog.boxes.len(), dir.display());
        Ok(catalog)
    }

    /// Build a catalog from a single JSON document.
    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let mut catalog = Self::default();
        catalog.merge_json(content, "box catalog")?;
        Ok(catalog)
    }

    fn merge_json(&mut self, content: &str, source: &str) -> Result<(), AppError> {
        let boxes: BTreeMap<String, BoxDescriptor> =
            serde_json::from_str(content).map_err(|e| AppError::ParseError {
                what: source.to_string(),
                details: e.to_string(),
            })?;

        for (name, descriptor) in boxes {
            if self.boxes.contains_key(&name) {
                return Err(AppError::ParseError {
                    what: source.to_string(),
                    details: format!("box '{}' is defined more than once", name),
                });
            }
            self.boxes.insert(name, descriptor);
        }
        Ok(())
    }
}

impl BoxCatalog for JsonBoxCatalog {
    fn get_box(&self, name: &str) -> Option<&BoxDescriptor> {
        self.boxes.get(name)
    }

    fn names(&self) -> Vec<&str> {
        self.boxes.keys().map(String::as_str).collect()
    }
}
