//! `aws` node blocks.

use minijinja::context;
use serde::Serialize;

use crate::adapters::TemplateEngine;
use crate::domain::{AppError, CloudParams, ResolvedNode};

/// Instance tag in template form.
#[derive(Debug, Serialize)]
pub(crate) struct Tag<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

pub(crate) fn tags(params: &CloudParams) -> Vec<Tag<'_>> {
    params.tags.iter().map(|(key, value)| Tag { key, value }).collect()
}

pub fn render(
    engine: &TemplateEngine,
    node: &ResolvedNode,
    params: &CloudParams,
) -> Result<String, AppError> {
    engine.render(
        "aws.rb.j2",
        context! {
            name => node.name.as_str(),
            host => node.host,
            ami => params.ami,
            tags => tags(params),
            instance_type => params.machine_type.name,
            device_name => params.device_name,
            user => params.user,
            ssh_pty => params.ssh_pty,
        },
    )
}
