//! Generate command: turn a template into a configuration directory.
//!
//! A run moves through validation, directory preparation, key pair provisioning,
//! per-node emission and finalization. Any failure after the directory was touched
//! removes the directory and deletes a provisioned key pair before the error is returned.

pub mod emitters;
mod key_pair;
mod node_resolver;
mod options;
mod role_writer;
mod validator;

use std::fmt;

use crate::app::AppContext;
use crate::app::commands::generate::emitters::{EmitSettings, KeyReference};
use crate::domain::key_pair::{key_pair_name, private_key_file_name};
use crate::domain::{
    AppError, KeyPair, NodeName, NodeSpec, NodeWarning, ProviderKind, ResolutionContext,
    ResolvedNode, SkipReason, Template, TemplateProblem,
};
use crate::ports::ConfigDirectory;

pub use options::{GenerateOptions, GenerateOutcome, OutputFormat, RunSettings};
pub use validator::{ValidationReport, validate};

/// Marker file holding the provider of the configuration.
pub const PROVIDER_MARKER: &str = "provider";
/// Marker file holding the absolute path of the source template.
pub const TEMPLATE_MARKER: &str = "template";

/// Why a node could not be generated.
#[derive(Debug)]
pub enum NodeFailure {
    /// The node is left out with a warning.
    Skipped(SkipReason),
    /// The run aborts.
    Fatal(AppError),
}

impl From<AppError> for NodeFailure {
    fn from(err: AppError) -> Self {
        NodeFailure::Fatal(err)
    }
}

/// Stage of a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    PreparingDirectory,
    ProvisioningResources,
    EmittingNodes,
    Finalizing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::PreparingDirectory => "preparing the configuration directory",
            Stage::ProvisioningResources => "provisioning cloud resources",
            Stage::EmittingNodes => "emitting nodes",
            Stage::Finalizing => "finalizing the configuration",
        };
        f.write_str(label)
    }
}

/// State of one run, consulted by the rollback.
struct RunContext<'a> {
    directory: &'a dyn ConfigDirectory,
    provider: ProviderKind,
    stage: Stage,
    key_pair: Option<KeyPair>,
    nodes: Vec<String>,
    warnings: Vec<NodeWarning>,
}

impl RunContext<'_> {
    fn skip(&mut self, warning: NodeWarning) {
        log::warn!("{}", warning);
        self.warnings.push(warning);
    }
}

/// Execute the generate command.
///
/// Argument errors (invalid template, existing directory) are returned before anything
/// is written.
pub fn execute(
    ctx: &AppContext<'_>,
    directory: &dyn ConfigDirectory,
    template: &Template,
    options: &GenerateOptions,
    settings: &RunSettings,
) -> Result<GenerateOutcome, AppError> {
    log::info!("Validating template {}", options.template_path.display());
    let report = validate(template, ctx.boxes(), options.format);
    let provider = report.provider()?;

    if directory.exists() && !options.override_existing {
        return Err(AppError::ConfigurationExists(directory.path().to_path_buf()));
    }

    let mut run = RunContext {
        directory,
        provider,
        stage: Stage::PreparingDirectory,
        key_pair: None,
        nodes: Vec::new(),
        warnings: Vec::new(),
    };

    if let Err(err) = run_stages(ctx, &mut run, template, &report, options, settings) {
        abort(ctx, &run, &err);
        return Err(err);
    }

    log::info!(
        "Generated {} node(s) for provider {} in {}",
        run.nodes.len(),
        provider,
        directory.path().display()
    );
    Ok(GenerateOutcome {
        configuration_path: directory.path().to_path_buf(),
        provider,
        master_file: options.format.master_file_name().to_string(),
        nodes: run.nodes,
        warnings: run.warnings,
        key_pair: run.key_pair,
    })
}

fn run_stages(
    ctx: &AppContext<'_>,
    run: &mut RunContext<'_>,
    template: &Template,
    report: &ValidationReport,
    options: &GenerateOptions,
    settings: &RunSettings,
) -> Result<(), AppError> {
    let directory = run.directory;
    prepare_directory(directory)?;

    run.stage = Stage::ProvisioningResources;
    let key = if run.provider.is_cloud() {
        let name = key_pair_name(
            &settings.configuration_id,
            directory.path(),
            &settings.host_machine,
        );
        key_pair::provision(ctx.key_pairs(), directory, &name, &mut run.key_pair)?;
        let private_key_path = directory.path().join(private_key_file_name(&name));
        Some(KeyReference { name, private_key_path: private_key_path.display().to_string() })
    } else {
        None
    };

    run.stage = Stage::EmittingNodes;
    let resolution = ResolutionContext {
        host_machine: &settings.host_machine,
        username: &settings.username,
        config_path: directory.path(),
        cpu_override: options.cpu_count,
    };

    let mut resolved = Vec::new();
    for (name, spec) in template.nodes() {
        if let Some(warning) = report.is_skipped(name) {
            run.skip(warning.clone());
            continue;
        }

        match emit_node(ctx, directory, name, spec, &resolution) {
            Ok(node) => {
                log::debug!("Generated node {}", name);
                run.nodes.push(name.to_string());
                resolved.push(node);
            }
            Err(NodeFailure::Skipped(reason)) => {
                run.skip(NodeWarning { node: name.to_string(), reason });
            }
            Err(NodeFailure::Fatal(err)) => return Err(err),
        }
    }

    if resolved.is_empty() {
        return Err(AppError::EmptyConfiguration);
    }

    let emit_settings = EmitSettings {
        provider: run.provider,
        template_path: options.template_path.display().to_string(),
        created_at: &settings.created_at,
        key,
        aws: &settings.aws,
        public_network: options.public_network,
        bridge: &settings.network.bridge,
    };
    let master = match options.format {
        OutputFormat::Vagrant => {
            emitters::render_vagrantfile(ctx.templates(), &resolved, &emit_settings)?
        }
        OutputFormat::Terraform => {
            emitters::infrastructure::render(ctx.templates(), &resolved, &emit_settings)?
        }
    };
    directory.write_file(options.format.master_file_name(), &master)?;

    run.stage = Stage::Finalizing;
    finalize(directory, run.provider, options)
}

fn prepare_directory(directory: &dyn ConfigDirectory) -> Result<(), AppError> {
    if directory.exists() {
        log::info!("Replacing existing configuration {}", directory.path().display());
        directory.remove()?;
    }
    directory.create()
}

/// Resolve one node and write its role files. Nothing is written for a skipped node.
fn emit_node(
    ctx: &AppContext<'_>,
    directory: &dyn ConfigDirectory,
    name: &str,
    spec: &NodeSpec,
    resolution: &ResolutionContext<'_>,
) -> Result<ResolvedNode, NodeFailure> {
    let descriptor = ctx.boxes().get_box(&spec.box_name).ok_or_else(|| {
        NodeFailure::Skipped(SkipReason::Template(TemplateProblem::UnknownBox {
            node: name.to_string(),
            box_name: spec.box_name.clone(),
        }))
    })?;
    let node_name =
        NodeName::new(name).map_err(|problem| AppError::InvalidTemplate(vec![problem]))?;

    let node = node_resolver::resolve(ctx, &node_name, spec, descriptor, resolution)?;
    role_writer::write_node_files(ctx.repos(), directory, name, spec, descriptor)?;
    Ok(node)
}

fn finalize(
    directory: &dyn ConfigDirectory,
    provider: ProviderKind,
    options: &GenerateOptions,
) -> Result<(), AppError> {
    for marker in [PROVIDER_MARKER, TEMPLATE_MARKER] {
        if directory.file_exists(marker) {
            return Err(AppError::MarkerExists(marker.to_string()));
        }
    }
    directory.write_file(PROVIDER_MARKER, provider.as_str())?;
    directory.write_file(TEMPLATE_MARKER, &options.template_path.display().to_string())?;
    Ok(())
}

fn abort(ctx: &AppContext<'_>, run: &RunContext<'_>, err: &AppError) {
    log::error!("Generation failed while {}: {}", run.stage, err);
    log::info!("Removing configuration directory {}", run.directory.path().display());
    if let Err(e) = run.directory.remove() {
        log::warn!("Unable to remove {}: {}", run.directory.path().display(), e);
    }
    if let Some(pair) = &run.key_pair {
        key_pair::rollback(ctx.key_pairs(), pair);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    use serde_json::Value;
    use tempfile::TempDir;

    use crate::adapters::{JsonBoxCatalog, JsonRepoRegistry, TemplateEngine};
    use crate::domain::config::{AwsConfig, NetworkConfig};
    use crate::testing::{
        FailingConfigDirectory, FakeDeviceNames, FakeKeyPairService, FakeMachineTypes,
    };

    const BOXES: &str = r#"{
        "centos_7_libvirt": {"provider": "libvirt", "platform": "centos", "platform_version": "7",
                             "box": "generic/centos7"},
        "ubuntu_bionic_qemu": {"provider": "qemu", "platform": "ubuntu",
                               "platform_version": "bionic", "box": "generic/ubuntu1804"},
        "centos_7_aws": {"provider": "aws", "platform": "centos", "platform_version": "7",
                         "ami": "ami-0abc", "user": "centos",
                         "supported_instance_types": ["t2.small", "t2.medium"]}
    }"#;

    struct Fixture {
        tmp: TempDir,
        boxes: JsonBoxCatalog,
        repos: JsonRepoRegistry,
        machine_types: FakeMachineTypes,
        device_names: FakeDeviceNames,
        key_pairs: FakeKeyPairService,
        templates: TemplateEngine,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with(FakeKeyPairService::new(), FakeMachineTypes::new())
        }

        fn with(key_pairs: FakeKeyPairService, machine_types: FakeMachineTypes) -> Self {
            Self {
                tmp: TempDir::new().unwrap(),
                boxes: JsonBoxCatalog::from_json(BOXES).unwrap(),
                repos: JsonRepoRegistry::embedded().unwrap(),
                machine_types,
                device_names: FakeDeviceNames::default(),
                key_pairs,
                templates: TemplateEngine::new().unwrap(),
            }
        }

        fn ctx(&self) -> AppContext<'_> {
            AppContext::new(
                &self.boxes,
                &self.repos,
                &self.machine_types,
                &self.device_names,
                &self.key_pairs,
                &self.templates,
            )
        }

        fn config_path(&self) -> PathBuf {
            self.tmp.path().join("cluster")
        }

        fn directory(&self) -> FailingConfigDirectory {
            FailingConfigDirectory::new(&self.config_path())
        }

        fn run(
            &self,
            directory: &dyn ConfigDirectory,
            template: &Template,
            options: &GenerateOptions,
        ) -> Result<GenerateOutcome, AppError> {
            execute(&self.ctx(), directory, template, options, &settings())
        }
    }

    fn settings() -> RunSettings {
        RunSettings {
            host_machine: "build-01".into(),
            username: "ci".into(),
            configuration_id: "a1b2c3d4".into(),
            aws: AwsConfig::default(),
            network: NetworkConfig::default(),
            created_at: "2026-10-18 10:00:00".into(),
        }
    }

    fn options() -> GenerateOptions {
        GenerateOptions {
            template_path: PathBuf::from("/work/template.json"),
            ..GenerateOptions::default()
        }
    }

    fn template(json: &str) -> Template {
        Template::parse(json, false).unwrap()
    }

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn generates_local_hypervisor_configuration() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(
            r#"{"node0": {"box": "centos_7_libvirt", "product": {"name": "packages"}}}"#,
        );

        let outcome = fixture.run(&directory, &template, &options()).unwrap();

        let root = fixture.config_path();
        assert_eq!(outcome.nodes, vec!["node0"]);
        assert_eq!(outcome.provider, ProviderKind::LocalHypervisor);
        assert!(outcome.warnings.is_empty());
        assert!(outcome.key_pair.is_none());

        let vagrantfile = read(&root.join("Vagrantfile"));
        assert!(vagrantfile.contains("config.vm.define 'node0' do |box|"));
        assert!(vagrantfile.contains("box.vm.box = 'generic/centos7'"));
        assert!(vagrantfile.contains("qemu.memory = 1024"));

        let role: Value = serde_json::from_str(&read(&root.join("node0.json"))).unwrap();
        assert_eq!(role["run_list"][1], "recipe[packages]");
        let node_config: Value =
            serde_json::from_str(&read(&root.join("node0-config.json"))).unwrap();
        assert_eq!(node_config, serde_json::json!({"run_list": ["role[node0]"]}));

        assert_eq!(read(&root.join("provider")), "libvirt");
        assert_eq!(read(&root.join("template")), "/work/template.json");
        assert!(!root.join("keypair").exists());
    }

    #[test]
    fn blocks_follow_template_order() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(
            r#"{"zeta": {"box": "centos_7_libvirt"}, "alpha": {"box": "centos_7_libvirt"},
                "mid": {"box": "centos_7_libvirt"}}"#,
        );

        let outcome = fixture.run(&directory, &template, &options()).unwrap();

        assert_eq!(outcome.nodes, vec!["zeta", "alpha", "mid"]);
        let vagrantfile = read(&fixture.config_path().join("Vagrantfile"));
        let zeta = vagrantfile.find("'zeta'").unwrap();
        let alpha = vagrantfile.find("'alpha'").unwrap();
        let mid = vagrantfile.find("'mid'").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }

    #[test]
    fn unknown_box_is_only_a_warning() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(
            r#"{"node0": {"box": "centos_7_libvirt"}, "node1": {"box": "no_such_box"},
                "node2": {"box": ""}}"#,
        );

        let outcome = fixture.run(&directory, &template, &options()).unwrap();

        assert_eq!(outcome.nodes, vec!["node0"]);
        let skipped: Vec<_> = outcome.warnings.iter().map(|w| w.node.as_str()).collect();
        assert_eq!(skipped, vec!["node1", "node2"]);
        let root = fixture.config_path();
        assert!(!root.join("node1.json").exists());
        assert!(!read(&root.join("Vagrantfile")).contains("'node1'"));
    }

    #[test]
    fn mixed_providers_touch_nothing() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template =
            template(r#"{"node0": {"box": "centos_7_libvirt"}, "node1": {"box": "centos_7_aws"}}"#);

        let err = fixture.run(&directory, &template, &options()).unwrap_err();

        assert!(matches!(err, AppError::InvalidTemplate(_)));
        assert_eq!(err.exit_code(), 2);
        assert!(!fixture.config_path().exists());
        assert!(fixture.key_pairs.generated().is_empty());
        assert_eq!(directory.removals(), 0);
    }

    #[test]
    fn every_invalid_name_is_reported() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(
            r#"{"1st": {"box": "centos_7_libvirt"}, "ok": {"box": "centos_7_libvirt"},
                "bad-name": {"box": "centos_7_libvirt"}}"#,
        );

        let err = fixture.run(&directory, &template, &options()).unwrap_err();

        match err {
            AppError::InvalidTemplate(problems) => assert_eq!(
                problems,
                vec![
                    TemplateProblem::InvalidName("1st".into()),
                    TemplateProblem::InvalidName("bad-name".into()),
                ]
            ),
            other => panic!("unexpected error {:?}", other),
        }
        assert!(!fixture.config_path().exists());
    }

    #[test]
    fn existing_directory_requires_override() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        std::fs::create_dir_all(fixture.config_path()).unwrap();
        std::fs::write(fixture.config_path().join("notes.txt"), "keep").unwrap();
        let template = template(r#"{"node0": {"box": "centos_7_libvirt"}}"#);

        let err = fixture.run(&directory, &template, &options()).unwrap_err();
        assert!(matches!(err, AppError::ConfigurationExists(_)));
        assert!(fixture.config_path().join("notes.txt").exists());

        let options = GenerateOptions { override_existing: true, ..options() };
        fixture.run(&directory, &template, &options).unwrap();
        assert!(!fixture.config_path().join("notes.txt").exists());
        assert!(fixture.config_path().join("Vagrantfile").exists());
    }

    #[test]
    fn cloud_run_provisions_key_pair() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(r#"{"node0": {"box": "centos_7_aws", "memory_size": 2048}}"#);

        let outcome = fixture.run(&directory, &template, &options()).unwrap();

        let root = fixture.config_path();
        let key_name = outcome.key_pair.as_ref().map(|pair| pair.name.clone()).unwrap();
        assert_eq!(key_name, "mdbci-a1b2c3d4-cluster-build-01");
        assert_eq!(fixture.key_pairs.generated(), vec![key_name.clone()]);
        assert!(fixture.key_pairs.deleted().is_empty());
        assert_eq!(read(&root.join("keypair")), key_name);
        assert!(root.join(format!("{}.pem", key_name)).exists());

        let vagrantfile = read(&root.join("Vagrantfile"));
        assert!(vagrantfile.contains(&format!("aws.keypair_name = '{}'", key_name)));
        assert!(vagrantfile.contains("aws.instance_type = 't2.small'"));
        assert!(vagrantfile.contains("override.ssh.username = 'centos'"));
        assert_eq!(read(&root.join("provider")), "aws");
    }

    #[cfg(unix)]
    #[test]
    fn private_key_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(r#"{"node0": {"box": "centos_7_aws"}}"#);

        let outcome = fixture.run(&directory, &template, &options()).unwrap();

        let name = outcome.key_pair.unwrap().name;
        let pem = fixture.config_path().join(format!("{}.pem", name));
        let mode = std::fs::metadata(pem).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn key_pair_failure_removes_directory() {
        let fixture = Fixture::with(FakeKeyPairService::failing(), FakeMachineTypes::new());
        let directory = fixture.directory();
        let template = template(r#"{"node0": {"box": "centos_7_aws"}}"#);

        let err = fixture.run(&directory, &template, &options()).unwrap_err();

        assert!(matches!(err, AppError::KeyPair { .. }));
        assert!(!fixture.config_path().exists());
        assert!(fixture.key_pairs.deleted().is_empty());
    }

    #[test]
    fn io_failure_mid_run_rolls_back_once() {
        let fixture = Fixture::new();
        let directory = FailingConfigDirectory::failing_on(&fixture.config_path(), "node2.json");
        let template = template(
            r#"{"node0": {"box": "centos_7_aws"}, "node1": {"box": "centos_7_aws"},
                "node2": {"box": "centos_7_aws"}, "node3": {"box": "centos_7_aws"},
                "node4": {"box": "centos_7_aws"}}"#,
        );

        let err = fixture.run(&directory, &template, &options()).unwrap_err();

        assert!(matches!(err, AppError::Io(_)));
        assert!(!fixture.config_path().exists());
        assert_eq!(fixture.key_pairs.generated().len(), 1);
        assert_eq!(fixture.key_pairs.deleted(), fixture.key_pairs.generated());
        assert_eq!(directory.removals(), 1);
        assert!(!directory.written().iter().any(|name| name == "node3.json"));
    }

    #[test]
    fn master_file_failure_rolls_back_key_pair() {
        let fixture = Fixture::new();
        let directory = FailingConfigDirectory::failing_on(&fixture.config_path(), "Vagrantfile");
        let template =
            template(r#"{"node0": {"box": "centos_7_aws"}, "node1": {"box": "centos_7_aws"}}"#);

        let err = fixture.run(&directory, &template, &options()).unwrap_err();

        assert!(matches!(err, AppError::Io(_)));
        assert!(!fixture.config_path().exists());
        assert_eq!(directory.removals(), 1);
        assert_eq!(fixture.key_pairs.generated().len(), 1);
        assert_eq!(fixture.key_pairs.deleted(), fixture.key_pairs.generated());
        assert!(directory.written().iter().any(|name| name == "node1.json"));
        assert!(!directory.written().iter().any(|name| name == PROVIDER_MARKER));
    }

    #[test]
    fn existing_marker_is_a_consistency_error() {
        let fixture = Fixture::new();
        let directory =
            FailingConfigDirectory::reporting_existing(&fixture.config_path(), PROVIDER_MARKER);
        let template = template(r#"{"node0": {"box": "centos_7_aws"}}"#);

        let err = fixture.run(&directory, &template, &options()).unwrap_err();

        assert!(matches!(err, AppError::MarkerExists(ref marker) if marker == "provider"));
        assert_eq!(err.exit_code(), 1);
        assert!(!fixture.config_path().exists());
        assert_eq!(directory.removals(), 1);
        assert_eq!(fixture.key_pairs.deleted(), fixture.key_pairs.generated());
        assert_eq!(fixture.key_pairs.deleted().len(), 1);
        assert!(directory.written().iter().any(|name| name == "Vagrantfile"));
        assert!(!directory.written().iter().any(|name| name == TEMPLATE_MARKER));
    }

    #[test]
    fn machine_type_failure_aborts_without_retry() {
        let fixture = Fixture::with(FakeKeyPairService::new(), FakeMachineTypes::failing());
        let directory = fixture.directory();
        let template =
            template(r#"{"node0": {"box": "centos_7_aws"}, "node1": {"box": "centos_7_aws"}}"#);

        let err = fixture.run(&directory, &template, &options()).unwrap_err();

        assert!(matches!(err, AppError::MachineType { ref node, .. } if node == "node0"));
        assert_eq!(fixture.machine_types.call_count(), 1);
        assert_eq!(fixture.key_pairs.deleted().len(), 1);
        assert!(!fixture.config_path().exists());
    }

    #[test]
    fn all_nodes_skipped_is_empty_configuration() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(
            r#"{"node0": {"box": "centos_7_libvirt", "product": {"name": "unknown_product"}}}"#,
        );

        let err = fixture.run(&directory, &template, &options()).unwrap_err();

        assert!(matches!(err, AppError::EmptyConfiguration));
        assert!(!fixture.config_path().exists());
    }

    #[test]
    fn unknown_product_skips_node() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(
            r#"{"node0": {"box": "centos_7_libvirt"},
                "node1": {"box": "centos_7_libvirt", "product": {"name": "unknown_product"}}}"#,
        );

        let outcome = fixture.run(&directory, &template, &options()).unwrap();

        assert_eq!(outcome.nodes, vec!["node0"]);
        assert_eq!(
            outcome.warnings[0].reason,
            SkipReason::UnknownProduct("unknown_product".into())
        );
        assert!(!fixture.config_path().join("node1.json").exists());
    }

    #[test]
    fn terraform_output_for_cloud() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(
            r#"{"node0": {"box": "centos_7_aws", "vpc": true}, "node1": {"box": "centos_7_aws"}}"#,
        );
        let options = GenerateOptions { format: OutputFormat::Terraform, ..options() };

        let outcome = fixture.run(&directory, &template, &options).unwrap();

        assert_eq!(outcome.master_file, "infrastructure.tf");
        let root = fixture.config_path();
        assert!(!root.join("Vagrantfile").exists());
        let descriptor = read(&root.join("infrastructure.tf"));
        assert_eq!(descriptor.matches("resource \"aws_vpc\"").count(), 1);
        assert_eq!(descriptor.matches("resource \"aws_instance\"").count(), 2);
    }

    #[test]
    fn terraform_rejected_for_local_hypervisor() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(r#"{"node0": {"box": "centos_7_libvirt"}}"#);
        let options = GenerateOptions { format: OutputFormat::Terraform, ..options() };

        let err = fixture.run(&directory, &template, &options).unwrap_err();

        assert!(matches!(
            err,
            AppError::InvalidTemplate(ref problems)
                if matches!(problems.as_slice(), [TemplateProblem::UnsupportedFormat { .. }])
        ));
        assert!(!fixture.config_path().exists());
    }

    #[test]
    fn network_virtualization_honours_overrides() {
        let fixture = Fixture::new();
        let directory = fixture.directory();
        let template = template(r#"{"node0": {"box": "ubuntu_bionic_qemu", "cpu_count": 2}}"#);
        let options = GenerateOptions { cpu_count: Some(8), public_network: true, ..options() };

        fixture.run(&directory, &template, &options).unwrap();

        let vagrantfile = read(&fixture.config_path().join("Vagrantfile"));
        assert!(vagrantfile.contains("qemu.cpus = 8"));
        assert!(vagrantfile.contains("box.vm.network :public_network, dev: 'virbr0'"));
    }

    #[test]
    fn generation_is_deterministic() {
        let first = Fixture::new();
        let second = Fixture::new();
        let template = template(
            r#"{"node0": {"box": "centos_7_libvirt", "hostname": "db"},
                "node1": {"box": "centos_7_libvirt", "memory_size": "4096"}}"#,
        );

        for fixture in [&first, &second] {
            fixture.run(&fixture.directory(), &template, &options()).unwrap();
        }

        for file in ["Vagrantfile", "node0.json", "node1-config.json"] {
            assert_eq!(
                read(&first.config_path().join(file)),
                read(&second.config_path().join(file)),
                "{} differs",
                file
            );
        }
    }
}
