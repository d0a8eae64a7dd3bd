// CLI module - Command line interface
pub mod args;
pub mod commands;
pub mod output;

pub use args::{Args, OutputFormat};
pub use commands::{default_dispatcher, execute_command};
pub use output::OutputWriter;
