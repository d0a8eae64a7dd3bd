use crate::cli::args::OutputFormat;
use crate::core::dispatch::CommandSummary;
use serde_json;
use std::io;
use tabled::{Table, Tabled};

/// Output writer trait for different formats
pub trait OutputWriter {
    fn write_unknown_command(
        &self,
        name: &str,
        available: &[CommandSummary],
    ) -> Result<(), OutputError>;
    fn write_error(&self, error: &str) -> Result<(), OutputError>;
}

/// Output formatting errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl From<OutputError> for crate::domain::error::ChromactlError {
    fn from(err: OutputError) -> Self {
        Self::Output(err.to_string())
    }
}

/// Console output writer
pub struct ConsoleWriter {
    format: OutputFormat,
}

impl ConsoleWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }
}

impl OutputWriter for ConsoleWriter {
    fn write_unknown_command(
        &self,
        name: &str,
        available: &[CommandSummary],
    ) -> Result<(), OutputError> {
        let names: Vec<&str> = available.iter().map(|c| c.name.as_str()).collect();
        match self.format {
            OutputFormat::Text => {
                eprintln!("Command '{}' does not exist.", name);
                eprintln!("Supported commands: {}", names.join(", "));
            }
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": "unknown command",
                    "command": name,
                    "available": names,
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Table => {
                eprintln!("Command '{}' does not exist.", name);
                if !available.is_empty() {
                    let rows: Vec<SupportedCommandRow> =
                        available.iter().map(SupportedCommandRow::from).collect();
                    eprintln!("{}", Table::new(rows));
                }
            }
        }
        Ok(())
    }

    fn write_error(&self, error: &str) -> Result<(), OutputError> {
        match self.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "error": error,
                    "level": "error"
                });
                eprintln!("{}", serde_json::to_string_pretty(&output)?);
            }
            _ => {
                eprintln!("Error: {}", error);
            }
        }
        Ok(())
    }
}

/// Table row for a supported command
#[derive(Tabled)]
struct SupportedCommandRow {
    command: String,
    description: String,
}

impl From<&CommandSummary> for SupportedCommandRow {
    fn from(summary: &CommandSummary) -> Self {
        Self {
            command: summary.name.clone(),
            description: summary.about.clone(),
        }
    }
}
