//! Per-node parameter resolution.

use crate::app::AppContext;
use crate::app::commands::generate::NodeFailure;
use crate::domain::node_params::{
    cloud_tags, resolve_box_image, resolve_cloud_user, resolve_cpu_count, resolve_driver,
    resolve_host, resolve_memory_size,
};
use crate::domain::{
    AppError, BoxDescriptor, CloudParams, HypervisorParams, NetworkParams, NodeName,
    NodeRequirements, NodeSpec, ProviderKind, ProviderParams, ResolutionContext, ResolvedNode,
    SkipReason,
};

/// Merge node, box and run values into the parameters one node is emitted with.
///
/// Cloud nodes consult the machine type selector once; its errors abort the run.
pub fn resolve(
    ctx: &AppContext<'_>,
    name: &NodeName,
    spec: &NodeSpec,
    descriptor: &BoxDescriptor,
    run: &ResolutionContext<'_>,
) -> Result<ResolvedNode, NodeFailure> {
    let memory_size = resolve_memory_size(spec);
    let cpu_count = resolve_cpu_count(run.cpu_override, spec, descriptor);
    let template_path = spec.template_path().map(str::to_string);

    let provider = match descriptor.provider {
        ProviderKind::LocalHypervisor => ProviderParams::LocalHypervisor(HypervisorParams {
            box_image: resolve_box_image(&spec.box_name, descriptor),
            platform: descriptor.platform.clone(),
            platform_version: descriptor.platform_version.clone(),
            ssh_pty: descriptor.ssh_pty,
            template_path,
        }),
        ProviderKind::NetworkVirtualization => ProviderParams::NetworkVirtualization(NetworkParams {
            box_image: resolve_box_image(&spec.box_name, descriptor),
            platform: descriptor.platform.clone(),
            platform_version: descriptor.platform_version.clone(),
            driver: resolve_driver(descriptor),
            ssh_pty: descriptor.ssh_pty,
            template_path,
        }),
        ProviderKind::Cloud => {
            let ami = descriptor.ami.clone().ok_or_else(|| {
                NodeFailure::Skipped(SkipReason::IncompleteBox {
                    box_name: spec.box_name.clone(),
                    field: "ami".to_string(),
                })
            })?;
            let requirements = NodeRequirements { cpu_count, memory_size };
            let machine_type = ctx
                .machine_types()
                .choose_instance_type(&descriptor.instance_type_candidates(), &requirements)
                .map_err(|e| AppError::MachineType {
                    node: name.to_string(),
                    details: e.to_string(),
                })?;
            let device_name = ctx.device_names().device_name_for_ami(&ami);

            ProviderParams::Cloud(CloudParams {
                ami,
                machine_type,
                device_name,
                user: resolve_cloud_user(descriptor),
                ssh_pty: descriptor.ssh_pty,
                vpc: spec.vpc,
                tags: cloud_tags(name, run),
            })
        }
    };

    Ok(ResolvedNode {
        name: name.clone(),
        host: resolve_host(name, spec),
        memory_size,
        cpu_count,
        provider,
    })
}
