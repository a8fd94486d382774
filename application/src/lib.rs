//! Application layer for school-meal
//!
//! This crate contains the lookup use case and the port definitions
//! that infrastructure adapters implement. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    meal_parser::MealDocumentParser,
    meal_source::{FetchError, MealSource},
    progress::{LookupProgressNotifier, NoProgress},
};
pub use use_cases::lookup_meals::{LookupMealsError, LookupMealsUseCase};
