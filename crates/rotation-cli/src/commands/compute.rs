//! Compute command implementation.
//!
//! Runs the capacity calculator on one input built from the configured
//! defaults (or a named scenario) plus command-line overrides.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use rotation_config::InputOverrides;
use rotation_core::types::SegmentBreakdown;
use rotation_core::{compute, try_compute, CalculationInput, CalculationResult, CapacityStatus};

use crate::cli::{Globals, OutputFormat};
use crate::commands::load_config;
use crate::error::CliError;
use crate::output::{
    format_gap, format_number, print_csv, print_header, print_table, print_warning,
    status_label, KeyValue,
};

/// Arguments for the compute command.
#[derive(Args, Debug, Default)]
pub struct ComputeArgs {
    /// Start from a named scenario in the configuration file
    #[arg(short, long)]
    pub scenario: Option<String>,

    /// Local customer base
    #[arg(long)]
    pub local_customers: Option<f64>,

    /// Tourist customer base
    #[arg(long)]
    pub tourist_customers: Option<f64>,

    /// Days between local visits
    #[arg(long)]
    pub local_frequency: Option<f64>,

    /// Days between tourist visits
    #[arg(long)]
    pub tourist_frequency: Option<f64>,

    /// Target dishes per day
    #[arg(long)]
    pub target_dishes: Option<f64>,

    /// Average party size
    #[arg(long)]
    pub avg_group_size: Option<f64>,

    /// Dishes ordered per person
    #[arg(long)]
    pub dishes_per_person: Option<f64>,

    /// Walk-in customers per day
    #[arg(long)]
    pub walk_in_daily: Option<f64>,

    /// Weekday show-up rate (percent)
    #[arg(long)]
    pub weekday_show_up: Option<f64>,

    /// Weekend show-up rate (percent)
    #[arg(long)]
    pub weekend_show_up: Option<f64>,

    /// No-show rate (percent)
    #[arg(long)]
    pub no_show_rate: Option<f64>,

    /// Clamp every field into its slider range before computing
    #[arg(long)]
    pub clamp: bool,

    /// Refuse inputs outside their domain instead of computing anyway
    #[arg(long)]
    pub strict: bool,

    /// Show capacity per segment against the target split
    #[arg(long)]
    pub breakdown: bool,
}

impl ComputeArgs {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            local_customers: self.local_customers,
            tourist_customers: self.tourist_customers,
            local_frequency: self.local_frequency,
            tourist_frequency: self.tourist_frequency,
            target_dishes: self.target_dishes,
            avg_group_size: self.avg_group_size,
            dishes_per_person: self.dishes_per_person,
            walk_in_daily: self.walk_in_daily,
            weekday_show_up: self.weekday_show_up,
            weekend_show_up: self.weekend_show_up,
            no_show_rate: self.no_show_rate,
        }
    }
}

/// JSON shape of a computation.
#[derive(Debug, Serialize)]
struct ComputeOutput<'a> {
    input: &'a CalculationInput,
    result: &'a CalculationResult,
    status: CapacityStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<&'a SegmentBreakdown>,
}

/// One segment row of the breakdown table.
#[derive(Debug, Serialize, Tabled)]
struct SegmentLine {
    #[tabled(rename = "Segment")]
    segment: String,
    #[tabled(rename = "Capacity")]
    capacity: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Gap")]
    gap: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Execute the compute command.
pub fn execute(args: ComputeArgs, globals: &Globals) -> Result<()> {
    let config = load_config(globals)?;
    let precision = config.output.precision;

    let base = match &args.scenario {
        Some(name) => {
            let set = config.scenario_set()?;
            set.find_by_name(name)
                .map(|s| s.input)
                .ok_or_else(|| CliError::UnknownScenario(name.clone()))?
        }
        None => config.default_input(),
    };
    let mut input = args.overrides().apply(&base);

    let bounds = config.input_bounds()?;
    if args.clamp {
        input = bounds.clamp_input(&input);
        debug!("input clamped to slider bounds");
    } else if !globals.quiet {
        for field in bounds.out_of_range(&input) {
            let b = bounds.get(field);
            print_warning(&format!(
                "{} = {} is outside the slider range {}..={}",
                field,
                input.get(field),
                b.min,
                b.max
            ));
        }
    }

    let result = if args.strict {
        try_compute(&input)?
    } else {
        compute(&input)
    };
    let breakdown = args
        .breakdown
        .then(|| SegmentBreakdown::from_metrics(&input, &result));

    match globals.format {
        OutputFormat::Table => {
            if !globals.quiet {
                print_header("Capacity Results");
            }
            print_table(&result_rows(&input, &result, precision))?;
            if let Some(ref breakdown) = breakdown {
                if !globals.quiet {
                    print_header("Segment Breakdown");
                }
                print_table(&segment_lines(breakdown, precision))?;
            }
        }
        OutputFormat::Json => {
            let output = ComputeOutput {
                input: &input,
                result: &result,
                status: result.status(),
                breakdown: breakdown.as_ref(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => print_csv(std::slice::from_ref(&result))?,
        OutputFormat::Minimal => {
            println!("{}", format_number(result.total_capacity, precision));
        }
    }

    Ok(())
}

fn result_rows(input: &CalculationInput, result: &CalculationResult, precision: usize) -> Vec<KeyValue> {
    vec![
        KeyValue::from_number("Local Active Base", result.local_active_base, precision),
        KeyValue::from_number("Tourist Active Base", result.tourist_active_base, precision),
        KeyValue::from_number("Total Active Base", result.total_active_base(), precision),
        KeyValue::from_number("Local Capacity", result.local_capacity, precision),
        KeyValue::from_number("Tourist Capacity", result.tourist_capacity, precision),
        KeyValue::from_number("Walk-in Capacity", result.walk_in_capacity, precision),
        KeyValue::from_number("Total Capacity", result.total_capacity, precision),
        KeyValue::from_number("Target", input.target_dishes, precision),
        KeyValue::new("Gap", format_gap(result.gap, precision)),
        KeyValue::from_number("Groups per Day", result.groups_per_day, precision),
        KeyValue::from_percent("Utilization", result.utilization_rate),
        KeyValue::new("Status", status_label(result.status()).to_string()),
    ]
}

fn segment_lines(breakdown: &SegmentBreakdown, precision: usize) -> Vec<SegmentLine> {
    breakdown
        .rows
        .iter()
        .map(|row| SegmentLine {
            segment: row.segment.to_string(),
            capacity: format_number(row.capacity, precision),
            target: format_number(row.target, precision),
            gap: format_gap(row.gap(), precision),
            status: status_label(row.status()).to_string(),
        })
        .collect()
}
