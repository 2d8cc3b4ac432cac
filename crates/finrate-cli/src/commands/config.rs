//! Config command implementation.
//!
//! Shows the solver settings in effect after loading `--config`.

use anyhow::Result;
use clap::Args;

use finrate_analytics::config::SolverSettings;

use crate::cli::OutputFormat;
use crate::output::{KeyValue, Report};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Print the built-in defaults instead of the effective settings
    #[arg(long)]
    pub defaults: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, settings: &SolverSettings, format: OutputFormat) -> Result<()> {
    let defaults = SolverSettings::default();
    let settings = if args.defaults { &defaults } else { settings };

    let irr = &settings.irr;
    let xirr = &settings.xirr;

    let rows = vec![
        KeyValue::new("irr.max_evaluations", irr.max_evaluations.to_string()),
        KeyValue::new("irr.precision", irr.precision.to_string()),
        KeyValue::new(
            "irr.initial_bracket",
            format!("[{}, {}]", irr.initial_low, irr.initial_high),
        ),
        KeyValue::new(
            "irr.ladder",
            format!(
                "+{} to {}, then x2 to {}",
                irr.ladder_step, irr.step_ceiling, irr.hard_ceiling
            ),
        ),
        KeyValue::new("irr.result_decimals", irr.result_decimals.to_string()),
        KeyValue::new("xirr.guess", xirr.guess.to_string()),
        KeyValue::new("xirr.max_iterations", xirr.max_iterations.to_string()),
        KeyValue::new(
            "xirr.convergence_decimals",
            xirr.convergence_decimals.to_string(),
        ),
        KeyValue::new("xirr.result_decimals", xirr.result_decimals.to_string()),
    ];

    Report {
        title: "Solver Settings",
        rows,
        json: settings,
        minimal: serde_json::to_string(settings)?,
    }
    .print(format)
}
