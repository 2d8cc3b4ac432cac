//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ConfigArgs, IrrArgs, NpvArgs, TvmArgs, XirrArgs};

/// Finrate - rate-of-return and time-value-of-money calculations
#[derive(Parser)]
#[command(name = "finrate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Log solver progress to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file with solver settings
    #[arg(short, long, global = true, env = "FINRATE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Internal rate of return of periodic cash flows
    Irr(IrrArgs),

    /// Internal rate of return of dated cash flows
    Xirr(XirrArgs),

    /// Net present value of periodic cash flows
    Npv(NpvArgs),

    /// Time-value-of-money formulas
    Tvm(TvmArgs),

    /// Show the effective solver settings
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Minimal output (just the value)
    Minimal,
}
