//! Presentation-level configuration
//!
//! Output settings after the config file and command-line flags are merged.

use crate::cli::commands::Cli;
use meal_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
    /// Show a spinner while the request is in flight
    pub show_progress: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
            show_progress: true,
        }
    }
}

impl OutputConfig {
    /// Apply command-line flags on top of file settings
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if let Some(format) = cli.output {
            self.format = format.into();
        }
        if cli.no_color {
            self.color = false;
        }
        // JSON goes to pipes; keep stderr quiet too
        if cli.quiet || self.format == OutputFormat::Json {
            self.show_progress = false;
        }
        self
    }
}
