//! Terraform infrastructure descriptor for cloud configurations.

use minijinja::context;

use crate::adapters::TemplateEngine;
use crate::app::commands::generate::emitters::EmitSettings;
use crate::app::commands::generate::emitters::cloud::tags;
use crate::domain::{AppError, CloudParams, ProviderParams, ResolvedNode};

/// Shared network resources the descriptor declares, each at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NetworkPolicy {
    /// At least one node asked for an isolated network.
    pub isolated: bool,
    /// At least one node uses the default security group.
    pub default_group: bool,
}

impl NetworkPolicy {
    pub fn for_nodes<'a>(nodes: impl IntoIterator<Item = &'a CloudParams>) -> Self {
        nodes.into_iter().fold(Self::default(), |policy, params| Self {
            isolated: policy.isolated || params.vpc,
            default_group: policy.default_group || !params.vpc,
        })
    }
}

fn cloud_params(node: &ResolvedNode) -> Result<&CloudParams, AppError> {
    match &node.provider {
        ProviderParams::Cloud(params) => Ok(params),
        other => Err(AppError::Render {
            template: "terraform_instance.tf.j2".to_string(),
            details: format!("node '{}' uses provider '{}'", node.name, other.kind()),
        }),
    }
}

/// Complete `infrastructure.tf`: provider and key locals, shared network resources,
/// then one instance per node in order.
pub fn render(
    engine: &TemplateEngine,
    nodes: &[ResolvedNode],
    settings: &EmitSettings<'_>,
) -> Result<String, AppError> {
    let params = nodes.iter().map(cloud_params).collect::<Result<Vec<_>, _>>()?;
    let policy = NetworkPolicy::for_nodes(params.iter().copied());

    let key_name = settings.key.as_ref().map(|key| key.name.as_str()).unwrap_or_default();
    let private_key_path =
        settings.key.as_ref().map(|key| key.private_key_path.as_str()).unwrap_or_default();

    let mut content = engine.render(
        "terraform_header.tf.j2",
        context! {
            template_path => settings.template_path,
            created_at => settings.created_at,
            region => settings.aws.region,
            profile => settings.aws.profile,
            key_name => key_name,
            private_key_path => private_key_path,
        },
    )?;

    if policy.isolated {
        content.push('\n');
        content.push_str(&engine.render("terraform_vpc.tf.j2", context! { key_name => key_name })?);
    }
    if policy.default_group {
        content.push('\n');
        content.push_str(
            &engine.render("terraform_default_sg.tf.j2", context! { key_name => key_name })?,
        );
    }

    for (node, params) in nodes.iter().zip(params) {
        content.push('\n');
        content.push_str(&engine.render(
            "terraform_instance.tf.j2",
            context! {
                name => node.name.as_str(),
                ami => params.ami,
                instance_type => params.machine_type.name,
                vpc => params.vpc,
                device_name => params.device_name,
                tags => tags(params),
                user => params.user,
            },
        )?);
    }

    Ok(content)
}
