//! Artifact emitters: resolved node parameters in, configuration text out.
//!
//! Emitters never touch the configuration directory; the orchestrator decides where
//! the text goes.

pub mod cloud;
pub mod infrastructure;
pub mod local_hypervisor;
pub mod network_virtualization;

use minijinja::context;

use crate::adapters::TemplateEngine;
use crate::domain::config::AwsConfig;
use crate::domain::{AppError, ProviderKind, ProviderParams, ResolvedNode};

/// Key pair references written into cloud master files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyReference {
    pub name: String,
    /// Absolute path of the private key file.
    pub private_key_path: String,
}

/// Run-wide values shared by every emitted block.
#[derive(Debug, Clone)]
pub struct EmitSettings<'a> {
    pub provider: ProviderKind,
    pub template_path: String,
    pub created_at: &'a str,
    pub key: Option<KeyReference>,
    pub aws: &'a AwsConfig,
    /// Attach `qemu` nodes to `bridge`.
    pub public_network: bool,
    pub bridge: &'a str,
}

/// Definition block of one node inside a Vagrantfile.
pub fn render_node(
    engine: &TemplateEngine,
    node: &ResolvedNode,
    settings: &EmitSettings<'_>,
) -> Result<String, AppError> {
    match &node.provider {
        ProviderParams::LocalHypervisor(params) => local_hypervisor::render(engine, node, params),
        ProviderParams::NetworkVirtualization(params) => {
            network_virtualization::render(engine, node, params, settings)
        }
        ProviderParams::Cloud(params) => cloud::render(engine, node, params),
    }
}

/// Complete Vagrantfile: header, one block per node in order, footer.
pub fn render_vagrantfile(
    engine: &TemplateEngine,
    nodes: &[ResolvedNode],
    settings: &EmitSettings<'_>,
) -> Result<String, AppError> {
    let key_name = settings.key.as_ref().map(|key| key.name.as_str()).unwrap_or_default();
    let private_key_path =
        settings.key.as_ref().map(|key| key.private_key_path.as_str()).unwrap_or_default();

    let mut content = engine.render(
        "vagrant_header.rb.j2",
        context! {
            template_path => settings.template_path,
            created_at => settings.created_at,
            provider => settings.provider.as_str(),
            key_name => key_name,
            private_key_path => private_key_path,
            region => settings.aws.region,
            security_group => settings.aws.security_group,
        },
    )?;

    for node in nodes {
        content.push('\n');
        content.push_str(&render_node(engine, node, settings)?);
    }

    content.push_str(&engine.render("vagrant_footer.rb.j2", context! {})?);
    Ok(content)
}
