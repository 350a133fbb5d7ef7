//! Command-line parsing and the application entry point

pub mod app;
pub mod args;
pub mod usage;

// Re-export types for convenient access
pub use app::{AppError, Mode, execute, resolve_plan, run};
pub use args::{Flag, OptionBag, ParsedArgs, parse_args};
