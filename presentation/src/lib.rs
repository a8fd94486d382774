//! Presentation layer for school-meal
//!
//! This crate contains the CLI definition, output formatters
//! and the loading spinner.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, FormatArg};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::SpinnerProgress;
