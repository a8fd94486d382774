//! Domain layer for school-meal
//!
//! This crate contains the meal model, date handling and menu cleanup.
//! It has no dependencies on network, markup parsing or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Query Key**: the `YYYYMMDD` token the meal service expects for a date
//! - **Meal Record**: every meal served on one queried date
//! - **Meal Group**: the dishes served under one meal-type label (조식, 중식, ...)
//! - **Menu Item**: a single dish, kept raw and exposed cleaned of allergen codes

pub mod config;
pub mod core;
pub mod meal;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use meal::{
    cleaner::clean_menu_item,
    date::{MealDate, QueryKey},
    entities::{MealGroup, MealRecord, MealRecordBuilder, MenuItem},
    lookup::MealLookup,
};
