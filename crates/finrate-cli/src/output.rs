//! Output formatting utilities.

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// A key-value pair for display.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Metric")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    /// Creates a new key-value pair.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates a key-value pair formatted as percentage.
    pub fn from_percent(key: impl Into<String>, value: f64, precision: usize) -> Self {
        Self {
            key: key.into(),
            value: format!("{:.prec$}%", value, prec = precision),
        }
    }

    /// Creates a key-value pair from a list of amounts.
    pub fn from_amounts(key: impl Into<String>, amounts: &[f64]) -> Self {
        let joined = amounts
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Self::new(key, joined)
    }
}

/// One command's result in all of its renderings.
pub struct Report<'a, T: Serialize> {
    /// Table title.
    pub title: &'a str,
    /// Table rows.
    pub rows: Vec<KeyValue>,
    /// JSON body.
    pub json: &'a T,
    /// Bare value for minimal output.
    pub minimal: String,
}

impl<T: Serialize> Report<'_, T> {
    /// Prints the report in the requested format.
    pub fn print(&self, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Table => {
                print_header(self.title);
                print_table(&self.rows);
            }
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(self.json)?),
            OutputFormat::Minimal => println!("{}", self.minimal),
        }
        Ok(())
    }
}

/// Prints data as a formatted table.
fn print_table<T: Tabled>(data: &[T]) {
    if data.is_empty() {
        println!("No results.");
        return;
    }

    let table = Table::new(data)
        .with(Style::rounded())
        .with(Modify::new(Columns::first()).with(Alignment::left()))
        .to_string();

    println!("{}", table);
}

/// Prints a header for a section.
pub fn print_header(title: &str) {
    println!("\n{}", title.bold().underline());
}

/// Prints a warning message.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}
