// Dispatch module - Name-based command dispatch
pub mod handler;
pub mod registry;

pub use handler::{BuildCommand, DemoCommand, Handler};
pub use registry::{CommandSummary, Dispatcher};
