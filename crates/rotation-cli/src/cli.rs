//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{CompareArgs, ComputeArgs, ConfigArgs};

/// Rotation - customer rotation capacity planner
#[derive(Parser)]
#[command(name = "rotation")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true, env = "ROTATION_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress headers, hints and warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute capacity metrics for one input
    Compute(ComputeArgs),

    /// Compare the scenarios from the configuration file
    Compare(CompareArgs),

    /// Show the range, step and default of every input field
    Bounds,

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

/// Options shared by every command.
#[derive(Debug, Clone)]
pub struct Globals {
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
    pub quiet: bool,
}

impl From<&Cli> for Globals {
    fn from(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            quiet: cli.quiet,
        }
    }
}
