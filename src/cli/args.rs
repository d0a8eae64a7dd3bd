use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Command line arguments for chromactl
#[derive(Parser, Debug)]
#[command(
    name = "chromactl",
    version = env!("CARGO_PKG_VERSION"),
    about = "Developer command driver for the Chroma rendering engine",
    long_about = "Dispatches engine development commands such as 'build' and 'demo' by name and passes the remaining arguments through to the command. Run without a command to enter an interactive prompt."
)]
pub struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format for diagnostics
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Command to dispatch and its arguments (prompts interactively when omitted).
    ///
    /// Captured raw: global flags are only honored before the command, so
    /// tokens like `--verbose` after it reach the handler untouched.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command_line: Vec<String>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Table output
    Table,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}
