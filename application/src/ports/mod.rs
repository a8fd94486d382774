//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod meal_parser;
pub mod meal_source;
pub mod progress;
