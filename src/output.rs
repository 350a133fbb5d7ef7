//! Terminal reporting for progress and diagnostics

pub mod reporter;

pub use reporter::Reporter;
