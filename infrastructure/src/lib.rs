//! Infrastructure layer for school-meal
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod neis;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileNeisConfig, FileOutputConfig,
};
pub use neis::{NeisClientConfig, NeisMealClient, NeisXmlParser};
