//! Configuration file loading for school-meal
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./school-meal.toml` or `./.school-meal.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/school-meal/config.toml`
//! 4. Fallback: `~/.config/school-meal/config.toml`
//! 5. Default values (the compiled-in NEIS constants)

mod file_config;
mod loader;

pub use file_config::{ConfigValidationError, FileConfig, FileNeisConfig, FileOutputConfig};
pub use loader::ConfigLoader;
