//! Chef role and node configuration documents.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const REMOVE_MARK_RECIPE: &str = "recipe[mdbci_provision_mark::remove_mark]";
pub const APPLY_MARK_RECIPE: &str = "recipe[mdbci_provision_mark::default]";

const ROLE_JSON_CLASS: &str = "Chef::Role";
const ROLE_CHEF_TYPE: &str = "role";

/// Chef role generated for one node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleDocument {
    pub name: String,
    pub default_attributes: Map<String, Value>,
    pub override_attributes: Map<String, Value>,
    pub json_class: String,
    pub description: String,
    pub chef_type: String,
    pub run_list: Vec<String>,
}

impl RoleDocument {
    /// Build a role whose run list brackets the product recipes with the provision mark
    /// removal and application, so an interrupted provisioning leaves no mark behind.
    pub fn new(name: &str, override_attributes: Map<String, Value>, recipes: &[String]) -> Self {
        let mut run_list = Vec::with_capacity(recipes.len() + 2);
        run_list.push(REMOVE_MARK_RECIPE.to_string());
        run_list.extend(recipes.iter().map(|recipe| format!("recipe[{}]", recipe)));
        run_list.push(APPLY_MARK_RECIPE.to_string());

        Self {
            name: name.to_string(),
            default_attributes: Map::new(),
            override_attributes,
            json_class: ROLE_JSON_CLASS.to_string(),
            description: String::new(),
            chef_type: ROLE_CHEF_TYPE.to_string(),
            run_list,
        }
    }
}

/// Node configuration pointing chef-solo at the node role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfigDocument {
    pub run_list: Vec<String>,
}

impl NodeConfigDocument {
    pub fn for_role(role_name: &str) -> Self {
        Self { run_list: vec![format!("role[{}]", role_name)] }
    }
}

pub fn role_file_name(node: &str) -> String {
    format!("{}.json", node)
}

pub fn node_config_file_name(node: &str) -> String {
    format!("{}-config.json", node)
}
