//! mdbci: generate virtual machine cluster configurations from declarative templates.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use std::path::{Path, PathBuf};

use adapters::{
    AwsCliAdapter, EmbeddedInstanceTypes, FilesystemConfigDirectory, JsonBoxCatalog,
    JsonRepoRegistry, TemplateEngine,
};
use app::AppContext;
use app::commands::generate;
use app::config::{RunEnvironment, default_config_dir, load_config, locate_config};
use domain::GeneratorConfig;
use ports::ConfigDirectory;

pub use app::commands::generate::{GenerateOptions, GenerateOutcome, OutputFormat, RunSettings};
pub use domain::{AppError, NodeWarning, ProviderKind, Template};

/// Inputs of [`generate`].
#[derive(Debug, Clone, Default)]
pub struct GenerateRequest {
    pub template_path: PathBuf,
    /// Configuration directory. Defaults to the template file stem in the current directory.
    pub configuration_path: Option<PathBuf>,
    pub override_existing: bool,
    pub cpu_count: Option<u64>,
    /// Attach `qemu` nodes to the host bridge.
    pub public_network: bool,
    pub format: OutputFormat,
    /// Explicit `config.toml`.
    pub config_path: Option<PathBuf>,
}

/// Generate a configuration directory from a template using the default adapters.
pub fn generate(request: &GenerateRequest) -> Result<GenerateOutcome, AppError> {
    let env = |key: &str| std::env::var(key).ok();
    let config = load_config(&locate_config(request.config_path.as_deref(), env))?;
    let environment = RunEnvironment::detect();

    let template_path = std::path::absolute(&request.template_path)?;
    let template = Template::load(&template_path)?;
    let configuration_path = match &request.configuration_path {
        Some(path) => path.clone(),
        None => default_configuration_path(&template_path)?,
    };

    let boxes = JsonBoxCatalog::load(&boxes_dir(&config, env)?)?;
    let repos = match &config.repos_file {
        Some(path) => JsonRepoRegistry::load(path)?,
        None => JsonRepoRegistry::embedded()?,
    };
    let machine_types = EmbeddedInstanceTypes::new()?;
    let aws = AwsCliAdapter::new(&config.aws);
    let templates = TemplateEngine::new()?;
    let ctx = AppContext::new(&boxes, &repos, &machine_types, &aws, &aws, &templates);

    let directory = FilesystemConfigDirectory::new(&configuration_path)?;
    let settings = RunSettings {
        configuration_id: config.configuration_id(&environment.host_machine, directory.path()),
        host_machine: environment.host_machine,
        username: environment.username,
        aws: config.aws,
        network: config.network,
        created_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S %z").to_string(),
    };
    let options = GenerateOptions {
        template_path,
        override_existing: request.override_existing,
        cpu_count: request.cpu_count,
        public_network: request.public_network,
        format: request.format,
    };

    generate::execute(&ctx, &directory, &template, &options, &settings)
}

fn boxes_dir<F>(config: &GeneratorConfig, env: F) -> Result<PathBuf, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = &config.boxes_dir {
        return Ok(dir.clone());
    }
    default_config_dir(env).map(|dir| dir.join("boxes")).ok_or_else(|| {
        AppError::config_error("Unable to locate the box catalog: set boxes_dir or HOME")
    })
}

fn default_configuration_path(template_path: &Path) -> Result<PathBuf, AppError> {
    let stem = template_path.file_stem().ok_or_else(|| {
        AppError::InvalidPath(format!(
            "Template path has no file name: {}",
            template_path.display()
        ))
    })?;
    Ok(std::env::current_dir()?.join(stem))
}
