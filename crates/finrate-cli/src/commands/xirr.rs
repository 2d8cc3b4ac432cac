//! XIRR command implementation.
//!
//! A search that does not converge is reported as "no solution" and is not
//! an error.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use finrate_analytics::config::SolverSettings;
use finrate_analytics::rates::xirr_with_config;
use finrate_core::types::{CashFlowSeries, Date, DateSeries};

use crate::cli::OutputFormat;
use crate::commands::{parse_flow, DatedFlow};
use crate::error::CliError;
use crate::output::{print_warning, KeyValue, Report};

const NO_SOLUTION: &str = "no solution";

/// Arguments for the xirr command.
#[derive(Args, Debug)]
pub struct XirrArgs {
    /// Dated cash flow as DATE=AMOUNT (repeat for each flow)
    #[arg(long = "flow", value_name = "DATE=AMOUNT", required = true, value_parser = parse_flow)]
    pub flows: Vec<DatedFlow>,

    /// Starting guess as a decimal fraction (0.1 = 10%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub guess: Option<f64>,
}

#[derive(Debug, Serialize)]
struct XirrOutput {
    dates: Vec<Date>,
    cash_flows: Vec<f64>,
    xirr: Option<f64>,
    iterations: Option<u32>,
}

/// Execute the xirr command.
pub fn execute(args: XirrArgs, settings: &SolverSettings, format: OutputFormat) -> Result<()> {
    let mut config = settings.xirr;
    if let Some(guess) = args.guess {
        config.guess = guess;
    }

    let flows: CashFlowSeries = args.flows.iter().map(|f| f.amount).collect();
    let dates: DateSeries = args.flows.iter().map(|f| f.date).collect();

    let solution = xirr_with_config(&flows, &dates, &config).map_err(CliError::from)?;

    let output = XirrOutput {
        dates: dates.as_slice().to_vec(),
        cash_flows: flows.as_slice().to_vec(),
        xirr: solution.map(|s| s.rate),
        iterations: solution.map(|s| s.iterations),
    };

    let mut rows: Vec<KeyValue> = args
        .flows
        .iter()
        .map(|f| KeyValue::new(f.date.to_string(), f.amount.to_string()))
        .collect();

    let minimal = match solution {
        Some(s) => {
            rows.push(KeyValue::from_percent("XIRR", s.rate, config.result_decimals as usize));
            rows.push(KeyValue::new("Iterations", s.iterations.to_string()));
            s.rate.to_string()
        }
        None => {
            if format == OutputFormat::Table {
                print_warning("XIRR did not converge");
            }
            rows.push(KeyValue::new("XIRR", NO_SOLUTION));
            NO_SOLUTION.to_string()
        }
    };

    Report {
        title: "Internal Rate of Return (Dated)",
        rows,
        json: &output,
        minimal,
    }
    .print(format)
}
