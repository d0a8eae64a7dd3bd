//! Chromactl Library
//!
//! Developer command driver for the Chroma rendering engine providing
//! name-based command dispatch with an interactive prompt fallback.

pub mod cli;
pub mod core;
pub mod domain;
pub mod infrastructure;

pub use crate::core::dispatch::{Dispatcher, Handler};
pub use domain::config::ChromactlConfig;
pub use domain::error::{ChromactlError, ChromactlResult};
