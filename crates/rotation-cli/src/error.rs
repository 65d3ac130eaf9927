//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// No config directory on this platform.
    #[error("Could not determine a configuration directory; pass --config")]
    NoConfigDir,

    /// `config init` would overwrite an existing file.
    #[error("Configuration file already exists: {}. Use --force to overwrite.", .0.display())]
    ConfigExists(PathBuf),

    /// `--scenario` named a scenario the configuration does not define.
    #[error("No scenario named '{0}' in the configuration")]
    UnknownScenario(String),
}
