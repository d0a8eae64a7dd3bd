// Domain module - Core types and errors
pub mod config;
pub mod error;
