//! Meal date and query key value objects

use crate::core::error::DomainError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Date format accepted from callers
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A calendar date the user asked about (Value Object)
///
/// Keeps the caller's original `YYYY-MM-DD` text alongside the parsed date,
/// since the meal record reports the date in the form it was queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealDate {
    original: String,
    date: NaiveDate,
}

impl MealDate {
    /// Parse a `YYYY-MM-DD` date string
    ///
    /// Empty (or whitespace-only) input is reported separately from
    /// malformed input so the caller can prompt for a date instead.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyInput);
        }

        // chrono accepts unpadded fields and signed years; the query key must
        // stay eight digits
        let bytes = trimmed.as_bytes();
        let well_formed = bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                4 | 7 => *b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_formed {
            return Err(DomainError::InvalidDate(trimmed.to_string()));
        }

        let date = NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
            .map_err(|_| DomainError::InvalidDate(trimmed.to_string()))?;

        Ok(Self {
            original: trimmed.to_string(),
            date,
        })
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        Self::from_naive(Local::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self {
            original: date.format(ISO_DATE_FORMAT).to_string(),
            date,
        }
    }

    /// The date as originally supplied
    pub fn as_str(&self) -> &str {
        &self.original
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The query key for this date
    pub fn query_key(&self) -> QueryKey {
        QueryKey::from_iso_date(&self.original)
    }
}

impl std::fmt::Display for MealDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// The meal service's date parameter: `YYYYMMDD` (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryKey(String);

impl QueryKey {
    /// Strip the separators from a `YYYY-MM-DD` date
    ///
    /// Pure string transform; callers are expected to have validated the date.
    pub fn from_iso_date(date: &str) -> Self {
        Self(date.replace('-', ""))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for QueryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
