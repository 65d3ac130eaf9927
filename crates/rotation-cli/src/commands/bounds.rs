//! Bounds command implementation.
//!
//! Lists the slider range, step and default of every input field, with any
//! overrides from the configuration file applied.

use anyhow::Result;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{Globals, OutputFormat};
use crate::commands::load_config;
use crate::output::{format_number, print_csv, print_header, print_json, print_table};

/// One field of the bounds table.
#[derive(Debug, Serialize, Tabled)]
struct BoundsLine {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Label")]
    label: &'static str,
    #[tabled(rename = "Min")]
    min: f64,
    #[tabled(rename = "Max")]
    max: f64,
    #[tabled(rename = "Step")]
    step: f64,
    #[tabled(rename = "Unit")]
    unit: String,
    #[tabled(rename = "Default")]
    default: f64,
}

/// Execute the bounds command.
pub fn execute(globals: &Globals) -> Result<()> {
    let config = load_config(globals)?;
    let bounds = config.input_bounds()?;
    let defaults = config.default_input();

    let lines: Vec<BoundsLine> = bounds
        .iter()
        .map(|(field, b)| BoundsLine {
            field: field.as_str(),
            label: field.label(),
            min: b.min,
            max: b.max,
            step: b.step,
            unit: b.unit.to_string(),
            default: defaults.get(field),
        })
        .collect();

    match globals.format {
        OutputFormat::Table => {
            if !globals.quiet {
                print_header("Input Bounds");
            }
            print_table(&lines)?;
        }
        OutputFormat::Json => print_json(&lines)?,
        OutputFormat::Csv => print_csv(&lines)?,
        OutputFormat::Minimal => {
            for line in &lines {
                println!(
                    "{}={}",
                    line.field,
                    format_number(line.default, config.output.precision)
                );
            }
        }
    }

    Ok(())
}
