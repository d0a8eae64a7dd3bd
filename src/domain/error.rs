use thiserror::Error;

/// Chromactl unified error type
#[derive(Error, Debug)]
pub enum ChromactlError {
    #[error("Command '{name}' does not exist. Supported commands: {}", .available.join(", "))]
    UnknownCommand {
        name: String,
        available: Vec<String>,
    },

    #[error("Command '{command}' failed: {source}")]
    Handler {
        command: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output error: {0}")]
    Output(String),
}

pub type ChromactlResult<T> = Result<T, ChromactlError>;
