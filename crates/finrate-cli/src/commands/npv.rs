//! NPV command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use finrate_analytics::formulas::{net_present_value, profitability_index};
use finrate_core::types::CashFlowSeries;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{KeyValue, Report};

/// Arguments for the npv command.
#[derive(Args, Debug)]
pub struct NpvArgs {
    /// Discount rate per period (as percentage, e.g., 10 for 10%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Cash flows, one per period, starting at time zero
    #[arg(required = true, allow_negative_numbers = true)]
    pub cash_flows: Vec<f64>,
}

#[derive(Debug, Serialize)]
struct NpvOutput {
    rate: f64,
    npv: f64,
    profitability_index: Option<f64>,
}

/// Execute the npv command.
pub fn execute(args: NpvArgs, format: OutputFormat) -> Result<()> {
    let flows = CashFlowSeries::new(args.cash_flows);

    let npv = net_present_value(args.rate, &flows).map_err(CliError::from)?;
    // Undefined without an initial investment
    let pi = profitability_index(args.rate, &flows).ok();

    let mut rows = vec![
        KeyValue::from_amounts("Cash Flows", flows.as_slice()),
        KeyValue::from_percent("Rate", args.rate, 2),
        KeyValue::new("NPV", format!("{npv:.2}")),
    ];
    if let Some(pi) = pi {
        rows.push(KeyValue::new("Profitability Index", format!("{pi:.2}")));
    }

    Report {
        title: "Net Present Value",
        rows,
        json: &NpvOutput {
            rate: args.rate,
            npv,
            profitability_index: pi,
        },
        minimal: npv.to_string(),
    }
    .print(format)
}
