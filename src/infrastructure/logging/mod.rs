// Logging module - Logging infrastructure
use crate::domain::error::{ChromactlError, ChromactlResult};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the configured level; `verbose` forces debug.
/// Initialization is one-shot per process.
pub fn init_logging(level: &str, verbose: bool) -> ChromactlResult<()> {
    let directive = if verbose {
        "chromactl=debug".to_string()
    } else {
        format!("chromactl={}", level)
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .try_init()
        .map_err(|e| ChromactlError::Config {
            message: format!("Failed to initialize logging: {}", e),
        })?;

    tracing::debug!("chromactl logging initialized");
    Ok(())
}
