//! `libvirt` node blocks.

use minijinja::context;

use crate::adapters::TemplateEngine;
use crate::domain::{AppError, HypervisorParams, ResolvedNode};

pub fn render(
    engine: &TemplateEngine,
    node: &ResolvedNode,
    params: &HypervisorParams,
) -> Result<String, AppError> {
    engine.render(
        "libvirt.rb.j2",
        context! {
            name => node.name.as_str(),
            host => node.host,
            box_image => params.box_image,
            platform => params.platform,
            platform_version => params.platform_version,
            ssh_pty => params.ssh_pty,
            template_path => params.template_path,
            memory_size => node.memory_size,
        },
    )
}
