//! Time-value-of-money command implementation.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;

use finrate_analytics::formulas::{
    amortization, future_value, payment, present_value, AmortizationTerm, PaymentTiming,
};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{KeyValue, Report};

/// Arguments for the tvm command.
#[derive(Args, Debug)]
pub struct TvmArgs {
    #[command(subcommand)]
    pub command: TvmCommand,
}

/// Time-value-of-money subcommands.
#[derive(Subcommand, Debug)]
pub enum TvmCommand {
    /// Present value of a single future cash flow
    Pv(ValueArgs),

    /// Future value of a single cash flow
    Fv(ValueArgs),

    /// Per-period payment on a loan
    Pmt(PaymentArgs),

    /// Monthly payment on an amortizing loan
    Amort(AmortArgs),
}

/// Arguments for pv and fv.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Rate per period (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Cash flow amount
    #[arg(long, allow_negative_numbers = true)]
    pub cash_flow: f64,

    /// Number of periods
    #[arg(short, long, default_value = "1")]
    pub periods: f64,
}

/// Arguments for pmt.
#[derive(Args, Debug)]
pub struct PaymentArgs {
    /// Rate per period (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Number of payments
    #[arg(short = 'n', long)]
    pub payments: u32,

    /// Loan amount; the payment has the opposite sign
    #[arg(long, allow_negative_numbers = true)]
    pub principal: f64,
}

/// Arguments for amort.
#[derive(Args, Debug)]
pub struct AmortArgs {
    /// Annual rate (as percentage)
    #[arg(short, long)]
    pub rate: f64,

    /// Loan amount
    #[arg(long)]
    pub principal: f64,

    /// Term in years
    #[arg(long, group = "term")]
    pub years: Option<u32>,

    /// Term in months
    #[arg(long, group = "term")]
    pub months: Option<u32>,

    /// Payments are made at the start of each month
    #[arg(long)]
    pub beginning: bool,
}

#[derive(Debug, Serialize)]
struct TvmOutput {
    formula: &'static str,
    value: f64,
}

/// Execute the tvm command.
pub fn execute(args: TvmArgs, format: OutputFormat) -> Result<()> {
    let (title, formula, value, mut rows) = match args.command {
        TvmCommand::Pv(v) => (
            "Present Value",
            "pv",
            present_value(v.rate, v.cash_flow, v.periods),
            value_rows(&v),
        ),
        TvmCommand::Fv(v) => (
            "Future Value",
            "fv",
            future_value(v.rate, v.cash_flow, v.periods),
            value_rows(&v),
        ),
        TvmCommand::Pmt(p) => (
            "Loan Payment",
            "pmt",
            payment(p.rate, p.payments, p.principal).map_err(CliError::from)?,
            vec![
                KeyValue::from_percent("Rate", p.rate, 2),
                KeyValue::new("Payments", p.payments.to_string()),
                KeyValue::new("Principal", p.principal.to_string()),
            ],
        ),
        TvmCommand::Amort(a) => {
            let term = match (a.years, a.months) {
                (Some(years), _) => AmortizationTerm::Years(years),
                (None, Some(months)) => AmortizationTerm::Months(months),
                (None, None) => anyhow::bail!("Specify the term with --years or --months"),
            };
            let timing = if a.beginning {
                PaymentTiming::Beginning
            } else {
                PaymentTiming::End
            };
            (
                "Amortization",
                "amort",
                amortization(a.principal, a.rate, term, timing).map_err(CliError::from)?,
                vec![
                    KeyValue::from_percent("Rate", a.rate, 2),
                    KeyValue::new("Principal", a.principal.to_string()),
                    KeyValue::new("Payments", term.months().to_string()),
                    KeyValue::new("Timing", format!("{timing:?}")),
                ],
            )
        }
    };

    rows.push(KeyValue::new(title, format!("{value:.2}")));

    Report {
        title,
        rows,
        json: &TvmOutput { formula, value },
        minimal: value.to_string(),
    }
    .print(format)
}

fn value_rows(args: &ValueArgs) -> Vec<KeyValue> {
    vec![
        KeyValue::from_percent("Rate", args.rate, 2),
        KeyValue::new("Cash Flow", args.cash_flow.to_string()),
        KeyValue::new("Periods", args.periods.to_string()),
    ]
}
