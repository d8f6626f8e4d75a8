//! Cluster template model.

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::AppError;

/// Default memory size in megabytes when the node does not specify one.
pub const DEFAULT_MEMORY_SIZE: u64 = 1024;

/// Product installation request attached to a node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProductSpec {
    /// Product name, e.g. `mariadb` or `packages`.
    pub name: Option<String>,
    /// Named repository reference, e.g. `mariadb@10.3+centos^7`.
    pub repo: Option<String>,
    pub version: Option<String>,
    pub cnf_template: Option<String>,
    /// Directory holding configuration templates, shared into the node.
    pub cnf_template_path: Option<String>,
}

/// Declared node in a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    /// Box identifier. Empty marks an unprovisioned placeholder.
    #[serde(rename = "box")]
    pub box_name: String,
    pub product: Option<ProductSpec>,
    pub products: Vec<ProductSpec>,
    pub hostname: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub memory_size: Option<u64>,
    #[serde(deserialize_with = "number_or_string")]
    pub cpu_count: Option<u64>,
    /// Request an isolated network for the node in infrastructure descriptors.
    pub vpc: bool,
}

impl NodeSpec {
    /// All products requested for the node, `product` first.
    pub fn all_products(&self) -> Vec<&ProductSpec> {
        self.product.iter().chain(self.products.iter()).collect()
    }

    /// First `cnf_template_path` declared by any product.
    pub fn template_path(&self) -> Option<&str> {
        self.all_products().into_iter().find_map(|product| product.cnf_template_path.as_deref())
    }
}

/// Ordered mapping of node name to node specification.
///
/// Iteration order equals the order of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<(String, NodeSpec)>,
}

impl Template {
    pub fn new(nodes: Vec<(String, NodeSpec)>) -> Self {
        Self { nodes }
    }

    /// Read a template from disk. Files ending in `.yml`/`.yaml` are parsed as YAML,
    /// everything else as JSON.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::TemplateParse {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        let yaml = matches!(path.extension().and_then(|ext| ext.to_str()), Some("yml" | "yaml"));
        Self::parse(&content, yaml).map_err(|details| AppError::TemplateParse {
            path: path.display().to_string(),
            details,
        })
    }

    /// Parse template content.
    pub fn parse(content: &str, yaml: bool) -> Result<Self, String> {
        let document: Value = if yaml {
            serde_yaml::from_str(content).map_err(|e| e.to_string())?
        } else {
            serde_json::from_str(content).map_err(|e| e.to_string())?
        };

        let Value::Object(entries) = document else {
            return Err("template must be a mapping of node names to node definitions".into());
        };

        let mut nodes = Vec::with_capacity(entries.len());
        for (name, value) in entries {
            if !value.is_object() {
                return Err(format!("definition of node '{}' must be a mapping", name));
            }
            let spec: NodeSpec = serde_json::from_value(value)
                .map_err(|e| format!("node '{}': {}", name, e))?;
            nodes.push((name, spec));
        }

        Ok(Self { nodes })
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&str, &NodeSpec)> {
        self.nodes.iter().map(|(name, spec)| (name.as_str(), spec))
    }
}

fn number_or_string<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(value)) => Ok(Some(value)),
        Some(Raw::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(Raw::Text(text)) => text.trim().parse().map(Some).map_err(serde::de::Error::custom),
    }
}
