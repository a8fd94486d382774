//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No date selected")]
    EmptyInput,

    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
}

impl DomainError {
    /// Check if this error means the user supplied nothing at all
    pub fn is_empty_input(&self) -> bool {
        matches!(self, DomainError::EmptyInput)
    }
}
