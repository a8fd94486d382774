//! CLI command definitions

use clap::{Parser, ValueEnum};
use meal_domain::OutputFormat;
use std::path::PathBuf;

/// Output format for meal lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Grouped menu for reading
    Text,
    /// JSON output
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// CLI arguments for school-meal
#[derive(Parser, Debug)]
#[command(name = "school-meal")]
#[command(author, version, about = "Show a school's meal schedule from the NEIS open-data service")]
#[command(long_about = r#"
Looks up one day's school meals from the NEIS meal service and prints
them grouped by meal, with allergen codes removed.

Configuration files are loaded from (in priority order):
1. --config <path>                          Explicit config file
2. ./school-meal.toml                       Project-level config
3. ~/.config/school-meal/config.toml        Global config

Example:
  school-meal
  school-meal 2024-03-15
  school-meal 2024-03-15 --output json --direct
"#)]
pub struct Cli {
    /// Date to look up, YYYY-MM-DD (defaults to today)
    pub date: Option<String>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<FormatArg>,

    /// Call the meal service directly instead of through the relay
    #[arg(long)]
    pub direct: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the loading spinner
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
