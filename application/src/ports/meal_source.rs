//! Meal source port
//!
//! Defines the interface for retrieving a raw meal document for a date.

use async_trait::async_trait;
use meal_domain::QueryKey;
use thiserror::Error;

/// Errors that can occur while fetching a meal document
///
/// Every variant is a network failure from the caller's point of view;
/// none of them are retried.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),
}

/// Source of raw meal documents
///
/// Implementations perform exactly one outbound request per call and
/// return the response body unchanged.
#[async_trait]
pub trait MealSource: Send + Sync {
    async fn fetch(&self, key: &QueryKey) -> Result<String, FetchError>;
}
