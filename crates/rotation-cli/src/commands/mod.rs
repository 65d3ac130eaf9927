//! CLI command implementations.

pub mod bounds;
pub mod compare;
pub mod compute;
pub mod config;

// Re-export submodules for convenience
pub use compare::CompareArgs;
pub use compute::ComputeArgs;
pub use config::ConfigArgs;

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use rotation_config::{RotationConfig, Validate};

use crate::cli::Globals;

/// Loads and validates the configuration.
///
/// An explicit `--config` path must exist. The default location is optional
/// and falls back to built-in defaults, as does a host without a config
/// directory.
pub fn load_config(globals: &Globals) -> Result<RotationConfig> {
    let config = match &globals.config {
        Some(path) => RotationConfig::from_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => load_optional(config::default_config_path().ok())?,
    };
    config.validate_or_error()?;

    if !config.output.color {
        colored::control::set_override(false);
    }
    Ok(config)
}

fn load_optional(path: Option<PathBuf>) -> Result<RotationConfig> {
    match path {
        Some(path) if path.exists() => RotationConfig::from_file(&path)
            .with_context(|| format!("Failed to load {}", path.display())),
        Some(path) => {
            debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(RotationConfig::default())
        }
        None => {
            debug!("no configuration directory, using defaults");
            Ok(RotationConfig::default())
        }
    }
}
