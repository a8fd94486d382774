//! Meal subdomain
//!
//! - [`date`] — [`MealDate`](date::MealDate) and the `YYYYMMDD` [`QueryKey`](date::QueryKey)
//! - [`entities`] — meal record, groups and menu items
//! - [`cleaner`] — allergen code stripping for display
//! - [`lookup`] — outcome of a completed lookup

pub mod cleaner;
pub mod date;
pub mod entities;
pub mod lookup;
