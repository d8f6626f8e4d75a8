//! Command line interface.

mod generate;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::GenerateRequest;
use crate::app::commands::generate::OutputFormat;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "mdbci")]
#[command(version)]
#[command(
    about = "Generate virtual machine cluster configurations from templates",
    long_about = None
)]
struct Cli {
    /// Path to config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a configuration directory from a template
    #[clap(visible_alias = "g")]
    Generate {
        /// Configuration directory to create (defaults to the template name)
        path: Option<PathBuf>,
        /// Template describing the nodes
        #[arg(short, long)]
        template: PathBuf,
        /// Replace an existing configuration directory
        #[arg(long = "override")]
        override_existing: bool,
        /// CPU count for every node
        #[arg(long)]
        cpu_count: Option<u64>,
        /// Attach qemu nodes to the host bridge
        #[arg(long)]
        ipv6: bool,
        /// Output format: vagrant or terraform
        #[arg(long, default_value = "vagrant")]
        format: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { path, template, override_existing, cpu_count, ipv6, format } => {
            format.parse::<OutputFormat>().and_then(|format| {
                generate::run_generate(GenerateRequest {
                    template_path: template,
                    configuration_path: path,
                    override_existing,
                    cpu_count,
                    public_network: ipv6,
                    format,
                    config_path: cli.config,
                })
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
