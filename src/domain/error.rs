use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single defect found while validating a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateProblem {
    /// Node name is not usable as a symbol in generated files.
    #[error(
        "Invalid node name '{0}': must contain only letters, digits or underscores and must not start with a digit"
    )]
    InvalidName(String),

    /// Boxes across nodes target more than one provider.
    #[error("Template mixes providers: {}", .0.join(", "))]
    MixedProviders(Vec<String>),

    /// Node has an empty `box` field.
    #[error("Node '{node}' does not reference a box")]
    MissingBox { node: String },

    /// Node references a box absent from the catalog.
    #[error("Node '{node}' references unknown box '{box_name}'")]
    UnknownBox { node: String, box_name: String },

    /// No node references a box that the catalog knows about.
    #[error("Template does not reference any known box, unable to determine the provider")]
    NoProvider,

    /// Output format cannot be produced for the template provider.
    #[error("Output format '{format}' is not supported for provider '{provider}'")]
    UnsupportedFormat { format: String, provider: String },
}

impl TemplateProblem {
    /// Whether the problem only excludes one node instead of the whole template.
    pub fn is_node_scoped(&self) -> bool {
        matches!(self, TemplateProblem::MissingBox { .. } | TemplateProblem::UnknownBox { .. })
    }
}

/// Library-wide error type for mdbci operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Template file could not be read or parsed.
    #[error("Failed to parse template {path}: {details}")]
    TemplateParse { path: String, details: String },

    /// Template failed validation.
    #[error("Template is invalid:\n{}", format_problems(.0))]
    InvalidTemplate(Vec<TemplateProblem>),

    /// Output format name is not recognised.
    #[error("Unknown output format '{0}', expected 'vagrant' or 'terraform'")]
    UnknownFormat(String),

    /// Configuration directory already exists and override was not requested.
    #[error("Configuration directory {} already exists, use --override to replace it", .0.display())]
    ConfigurationExists(PathBuf),

    /// Key pair could not be created.
    #[error("Unable to create key pair '{name}': {details}")]
    KeyPair { name: String, details: String },

    /// Machine type selection failed for a cloud node.
    #[error("Unable to choose machine type for node '{node}': {details}")]
    MachineType { node: String, details: String },

    /// No instance type satisfies the node requirements.
    #[error("No instance type among [{candidates}] provides {cpu_count} CPUs and {memory_size} MB of memory")]
    NoMachineType { candidates: String, cpu_count: u64, memory_size: u64 },

    /// Template rendering failed.
    #[error("Failed to render template '{template}': {details}")]
    Render { template: String, details: String },

    /// Marker file already present at finalize time.
    #[error("Marker file '{0}' already exists in the configuration directory")]
    MarkerExists(String),

    /// All nodes were skipped, nothing was generated.
    #[error("No node definitions were generated, configuration is empty")]
    EmptyConfiguration,

    /// External command failed.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// Path escapes the configuration directory.
    #[error("Path '{0}' is outside of the configuration directory")]
    InvalidPath(String),

    /// Catalog or registry data is malformed.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn format_problems(problems: &[TemplateProblem]) -> String {
    problems.iter().map(|problem| format!("  - {}", problem)).collect::<Vec<_>>().join("\n")
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether the error was caused by user input and raised before any mutation.
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidTemplate(_)
                | AppError::ConfigurationExists(_)
                | AppError::UnknownFormat(_)
                | AppError::TemplateParse { .. }
        )
    }

    /// Process exit code for the error.
    pub fn exit_code(&self) -> i32 {
        if self.is_argument_error() { 2 } else { 1 }
    }
}
