//! Generator configuration and run environment loading.
//!
//! Pure parsing lives in `domain::config`; this module decides where the
//! configuration comes from and what the generating host looks like.

mod load_config;
mod run_environment;

pub use load_config::{ConfigSource, default_config_dir, load_config, locate_config};
pub use run_environment::RunEnvironment;
