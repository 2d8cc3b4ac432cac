//! IRR command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use finrate_analytics::config::SolverSettings;
use finrate_analytics::rates::irr_with_config;
use finrate_core::types::CashFlowSeries;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{KeyValue, Report};

/// Arguments for the irr command.
#[derive(Args, Debug)]
pub struct IrrArgs {
    /// Cash flows, one per period, starting at time zero
    #[arg(required = true, allow_negative_numbers = true)]
    pub cash_flows: Vec<f64>,

    /// Maximum number of NPV evaluations (overrides the config file)
    #[arg(short, long)]
    pub max_evaluations: Option<u32>,
}

#[derive(Debug, Serialize)]
struct IrrOutput<'a> {
    cash_flows: &'a [f64],
    irr: f64,
    evaluations: u32,
    max_evaluations: u32,
}

/// Execute the irr command.
pub fn execute(args: IrrArgs, settings: &SolverSettings, format: OutputFormat) -> Result<()> {
    let mut config = settings.irr;
    if let Some(limit) = args.max_evaluations {
        config.max_evaluations = limit;
    }

    let flows = CashFlowSeries::new(args.cash_flows);
    let solution = irr_with_config(&flows, &config).map_err(CliError::from)?;

    tracing::debug!(
        "irr solved in {} evaluations, bracket upper bound {}",
        solution.evaluations,
        solution.upper_bound
    );

    let output = IrrOutput {
        cash_flows: flows.as_slice(),
        irr: solution.rate,
        evaluations: solution.evaluations,
        max_evaluations: config.max_evaluations,
    };

    Report {
        title: "Internal Rate of Return",
        rows: vec![
            KeyValue::from_amounts("Cash Flows", flows.as_slice()),
            KeyValue::from_percent("IRR", solution.rate, config.result_decimals as usize),
            KeyValue::new(
                "Evaluations",
                format!("{} / {}", solution.evaluations, config.max_evaluations),
            ),
        ],
        json: &output,
        minimal: solution.rate.to_string(),
    }
    .print(format)
}
