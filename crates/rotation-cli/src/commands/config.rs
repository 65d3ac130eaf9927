//! Config command implementation.
//!
//! Shows, locates and creates the planner configuration file.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use rotation_config::RotationConfig;

use crate::cli::{Globals, OutputFormat};
use crate::commands::load_config;
use crate::error::CliError;
use crate::output::{print_header, print_info, print_success};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a starter configuration file
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Default configuration file location.
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(CliError::NoConfigDir)?;
    Ok(home.join("rotation").join("config.toml"))
}

fn target_path(globals: &Globals) -> Result<PathBuf> {
    match &globals.config {
        Some(path) => Ok(path.clone()),
        None => default_config_path(),
    }
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, globals: &Globals) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(globals),
        ConfigCommand::Path => execute_path(globals),
        ConfigCommand::Init(init_args) => execute_init(init_args, globals),
    }
}

fn execute_show(globals: &Globals) -> Result<()> {
    let config = load_config(globals)?;

    match globals.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&config)?),
        OutputFormat::Table | OutputFormat::Csv | OutputFormat::Minimal => {
            if globals.format == OutputFormat::Table && !globals.quiet {
                print_header("Current Configuration");
            }
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}

fn execute_path(globals: &Globals) -> Result<()> {
    let path = target_path(globals)?;
    if globals.format == OutputFormat::Minimal || globals.quiet {
        println!("{}", path.display());
        return Ok(());
    }
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}

fn execute_init(args: InitArgs, globals: &Globals) -> Result<()> {
    let path = target_path(globals)?;
    if path.exists() && !args.force {
        return Err(CliError::ConfigExists(path).into());
    }
    RotationConfig::template().save(&path)?;
    if !globals.quiet {
        print_success(&format!("Wrote {}", path.display()));
    }
    Ok(())
}
