//! Chef role and node configuration files.

use serde_json::{Map, Value};

use crate::app::commands::generate::NodeFailure;
use crate::domain::role::{node_config_file_name, role_file_name};
use crate::domain::{
    AppError, BoxDescriptor, NodeConfigDocument, NodeSpec, ProductSpec, RepoDescriptor,
    RoleDocument, SkipReason,
};
use crate::ports::{ConfigDirectory, RepoRegistry};

/// Product resolved against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedProduct {
    name: String,
    repo: Option<RepoDescriptor>,
}

/// Write `<node>.json` and `<node>-config.json`.
pub fn write_node_files(
    repos: &dyn RepoRegistry,
    directory: &dyn ConfigDirectory,
    node: &str,
    spec: &NodeSpec,
    descriptor: &BoxDescriptor,
) -> Result<(), NodeFailure> {
    let role = build_role(repos, node, spec, descriptor).map_err(NodeFailure::Skipped)?;
    let node_config = NodeConfigDocument::for_role(node);

    directory.write_file(&role_file_name(node), &to_json(&role)?)?;
    directory.write_file(&node_config_file_name(node), &to_json(&node_config)?)?;
    Ok(())
}

/// Role installing every product of the node.
pub fn build_role(
    repos: &dyn RepoRegistry,
    node: &str,
    spec: &NodeSpec,
    descriptor: &BoxDescriptor,
) -> Result<RoleDocument, SkipReason> {
    let mut attributes = Map::new();
    let mut recipes = Vec::new();

    for product in spec.all_products() {
        let resolved = resolve_product(repos, product, descriptor)?;
        attributes.insert(
            repos.attribute_name(&resolved.name),
            Value::Object(product_attributes(product, resolved.repo.as_ref())),
        );
        recipes.push(repos.recipe_name(&resolved.name));
    }

    Ok(RoleDocument::new(node, attributes, &recipes))
}

fn resolve_product(
    repos: &dyn RepoRegistry,
    product: &ProductSpec,
    descriptor: &BoxDescriptor,
) -> Result<ResolvedProduct, SkipReason> {
    if let Some(reference) = &product.repo {
        if !repos.known_repo(reference) {
            return Err(SkipReason::UnknownRepo(reference.clone()));
        }
        return Ok(ResolvedProduct {
            name: repos.product_name(reference),
            repo: repos.get_repo(reference),
        });
    }

    let name = product.name.as_deref().ok_or(SkipReason::UnnamedProduct)?;
    if !repos.known_product(name) {
        return Err(SkipReason::UnknownProduct(name.to_string()));
    }
    if !repos.requires_repo(name) {
        return Ok(ResolvedProduct { name: name.to_string(), repo: None });
    }

    match repos.find_repo(name, product, descriptor) {
        Some(repo) => Ok(ResolvedProduct { name: name.to_string(), repo: Some(repo) }),
        None => Err(SkipReason::RepoNotFound {
            product: name.to_string(),
            version: product.version.clone().unwrap_or_else(|| "latest".to_string()),
            platform: descriptor.platform.clone(),
            platform_version: descriptor.platform_version.clone(),
        }),
    }
}

fn product_attributes(product: &ProductSpec, repo: Option<&RepoDescriptor>) -> Map<String, Value> {
    let mut attributes = Map::new();
    match repo {
        Some(repo) => {
            attributes.insert("version".into(), Value::String(repo.version.clone()));
            attributes.insert("repo".into(), Value::String(repo.repo.clone()));
            if let Some(key) = &repo.repo_key {
                attributes.insert("repo_key".into(), Value::String(key.clone()));
            }
        }
        None => {
            if let Some(version) = &product.version {
                attributes.insert("version".into(), Value::String(version.clone()));
            }
        }
    }
    if let Some(cnf_template) = &product.cnf_template {
        attributes.insert("cnf_template".into(), Value::String(cnf_template.clone()));
    }
    if let Some(path) = &product.cnf_template_path {
        attributes.insert("cnf_template_path".into(), Value::String(path.clone()));
    }
    attributes
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(value)?)
}
