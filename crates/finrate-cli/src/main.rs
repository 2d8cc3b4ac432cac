//! Finrate CLI - Command-line interface for rate-of-return calculations.
//!
//! # Usage
//!
//! ```bash
//! # Internal rate of return of periodic cash flows
//! finrate irr -- -1000 300 400 500
//!
//! # XIRR of dated cash flows
//! finrate xirr --flow 2015-12-01=-1000 --flow 2016-08-01=-100 --flow 2016-08-19=1200
//!
//! # Net present value at 10%
//! finrate npv --rate 10 -- -500000 200000 300000 200000
//!
//! # Loan payment
//! finrate tvm pmt --rate 2 --payments 36 --principal -1000000
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use finrate_analytics::config::SolverSettings;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let settings = load_settings(cli.config.as_deref())?;
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Irr(args) => commands::irr::execute(args, &settings, format)?,
        Commands::Xirr(args) => commands::xirr::execute(args, &settings, format)?,
        Commands::Npv(args) => commands::npv::execute(args, format)?,
        Commands::Tvm(args) => commands::tvm::execute(args, format)?,
        Commands::Config(args) => commands::config::execute(args, &settings, format)?,
    }

    Ok(())
}

/// Installs a stderr subscriber. `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("finrate=debug,finrate_analytics=debug,finrate_math=debug")
        })
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Reads solver settings from `path`, or the defaults when none is given.
fn load_settings(path: Option<&Path>) -> Result<SolverSettings> {
    let Some(path) = path else {
        return Ok(SolverSettings::default());
    };

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let settings = SolverSettings::from_json(&json)
        .with_context(|| format!("Invalid config file {}", path.display()))?;

    tracing::debug!("loaded solver settings from {}", path.display());
    Ok(settings)
}
