// Core module - Command dispatch engine
pub mod dispatch;
