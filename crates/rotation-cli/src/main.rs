//! Rotation CLI - capacity planning for restaurant customer rotation.
//!
//! # Usage
//!
//! ```bash
//! # Capacity for the default preset
//! rotation compute
//!
//! # What-if: more walk-ins against a higher target
//! rotation compute --walk-in-daily 60 --target-dishes 250 --breakdown
//!
//! # Compare the scenarios in the config file
//! rotation --config planner.toml compare
//!
//! # Slider ranges
//! rotation bounds
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands, Globals};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let globals = Globals::from(&cli);

    match cli.command {
        Commands::Compute(args) => commands::compute::execute(args, &globals)?,
        Commands::Compare(args) => commands::compare::execute(args, &globals)?,
        Commands::Bounds => commands::bounds::execute(&globals)?,
        Commands::Config(args) => commands::config::execute(args, &globals)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
