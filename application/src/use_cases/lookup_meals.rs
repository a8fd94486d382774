//! Lookup Meals use case
//!
//! Date string in, meal lookup out: validate the date, fetch the document
//! for its query key, parse it into a meal record.

use crate::ports::meal_parser::MealDocumentParser;
use crate::ports::meal_source::{FetchError, MealSource};
use crate::ports::progress::{LookupProgressNotifier, NoProgress};
use meal_domain::{DomainError, MealDate, MealLookup};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that end a meal lookup
#[derive(Error, Debug)]
pub enum LookupMealsError {
    #[error("No date selected")]
    EmptyInput,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Network error: {0}")]
    Network(#[from] FetchError),
}

impl From<DomainError> for LookupMealsError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::EmptyInput => LookupMealsError::EmptyInput,
            DomainError::InvalidDate(input) => LookupMealsError::InvalidDate(input),
        }
    }
}

impl LookupMealsError {
    pub fn is_network(&self) -> bool {
        matches!(self, LookupMealsError::Network(_))
    }
}

/// Use case for looking up one day's meals
///
/// Holds no state between calls; overlapping lookups are independent.
pub struct LookupMealsUseCase<S: MealSource + 'static, P: MealDocumentParser> {
    source: Arc<S>,
    parser: P,
}

impl<S: MealSource + 'static, P: MealDocumentParser> LookupMealsUseCase<S, P> {
    pub fn new(source: Arc<S>, parser: P) -> Self {
        Self { source, parser }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, date_input: &str) -> Result<MealLookup, LookupMealsError> {
        self.execute_with_progress(date_input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// An empty or malformed date is rejected before any request is made.
    pub async fn execute_with_progress(
        &self,
        date_input: &str,
        progress: &dyn LookupProgressNotifier,
    ) -> Result<MealLookup, LookupMealsError> {
        let date = MealDate::parse(date_input)?;
        self.lookup(&date, progress).await
    }

    /// Look up an already validated date
    pub async fn lookup(
        &self,
        date: &MealDate,
        progress: &dyn LookupProgressNotifier,
    ) -> Result<MealLookup, LookupMealsError> {
        let key = date.query_key();
        info!("Looking up meals for {} (key {})", date, key);

        progress.on_lookup_start(date.as_str());
        let fetched = self.source.fetch(&key).await;
        progress.on_lookup_finish(date.as_str(), fetched.is_ok());

        let document = match fetched {
            Ok(document) => document,
            Err(e) => {
                warn!("Meal fetch for {} failed: {}", key, e);
                return Err(e.into());
            }
        };
        debug!("Received {} bytes for {}", document.len(), key);

        let record = self.parser.parse(&document, date.as_str());
        let lookup = MealLookup::from_parsed(date.as_str(), record);
        match &lookup {
            MealLookup::Found(record) => {
                info!("Found {} meal group(s) for {}", record.meals().len(), date)
            }
            MealLookup::NoData { .. } => info!("No meal data for {}", date),
        }

        Ok(lookup)
    }
}
