//! Compare command implementation.
//!
//! Evaluates every scenario from the configuration file and lists capacity
//! against target side by side.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use rotation_scenarios::prelude::*;

use crate::cli::{Globals, OutputFormat};
use crate::commands::load_config;
use crate::output::{
    format_gap, format_number, print_csv, print_header, print_info, print_json, print_table,
    status_label,
};

/// Arguments for the compare command.
#[derive(Args, Debug, Default)]
pub struct CompareArgs {
    /// Evaluate scenarios in parallel regardless of the configured threshold
    #[arg(long)]
    pub parallel: bool,

    /// Fail on the first scenario with an out-of-domain input
    #[arg(long)]
    pub strict: bool,
}

/// One row of the comparison table.
#[derive(Debug, Serialize, Tabled)]
struct CompareLine {
    #[tabled(rename = "Scenario")]
    name: String,
    #[tabled(rename = "Capacity")]
    capacity: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Gap")]
    gap: String,
    #[tabled(rename = "Active Base")]
    active_base: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl CompareLine {
    fn new(row: &ComparisonRow, precision: usize) -> Self {
        Self {
            name: row.name.clone(),
            capacity: format_number(row.capacity, precision),
            target: format_number(row.target, precision),
            gap: format_gap(row.gap, precision),
            active_base: format_number(row.active_base, precision),
            status: status_label(row.status).to_string(),
        }
    }
}

/// Execute the compare command.
pub fn execute(args: CompareArgs, globals: &Globals) -> Result<()> {
    let config = load_config(globals)?;
    let precision = config.output.precision;

    let evaluation = if args.parallel {
        config.evaluation.clone().with_parallel(true).with_threshold(1)
    } else {
        config.evaluation.clone()
    };

    let set = config.scenario_set()?;
    let evaluations = if args.strict {
        set.try_evaluate(&evaluation)?
    } else {
        set.evaluate(&evaluation)
    };
    let rows: Vec<ComparisonRow> = evaluations.iter().map(ScenarioEvaluation::to_row).collect();

    match globals.format {
        OutputFormat::Table => {
            if !globals.quiet {
                print_header("Scenario Comparison");
            }
            let lines: Vec<_> = rows.iter().map(|r| CompareLine::new(r, precision)).collect();
            print_table(&lines)?;
            if !globals.quiet && rows.len() > 1 {
                if let Some(best) = best_by_gap(&evaluations) {
                    print_info(&format!(
                        "Largest gap: {} ({})",
                        best.name,
                        format_gap(best.result.gap, precision)
                    ));
                }
            }
        }
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Csv => print_csv(&rows)?,
        OutputFormat::Minimal => {
            if let Some(best) = best_by_gap(&evaluations) {
                println!("{}", best.name);
            }
        }
    }

    Ok(())
}
