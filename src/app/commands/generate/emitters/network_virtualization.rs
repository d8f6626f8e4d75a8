//! `qemu` node blocks.

use minijinja::context;

use crate::adapters::TemplateEngine;
use crate::app::commands::generate::emitters::EmitSettings;
use crate::domain::{AppError, NetworkParams, ResolvedNode};

pub fn render(
    engine: &TemplateEngine,
    node: &ResolvedNode,
    params: &NetworkParams,
    settings: &EmitSettings<'_>,
) -> Result<String, AppError> {
    engine.render(
        "qemu.rb.j2",
        context! {
            name => node.name.as_str(),
            host => node.host,
            box_image => params.box_image,
            platform => params.platform,
            platform_version => params.platform_version,
            ssh_pty => params.ssh_pty,
            template_path => params.template_path,
            public_network => settings.public_network,
            bridge => settings.bridge,
            driver => params.driver,
            cpu_count => node.cpu_count,
            memory_size => node.memory_size,
        },
    )
}
