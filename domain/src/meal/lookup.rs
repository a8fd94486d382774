//! Meal lookup outcome

use super::entities::MealRecord;

/// Result of a completed meal lookup
///
/// Both variants are successful lookups; transport failures are reported
/// as errors by the use case instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MealLookup {
    /// The service returned at least one usable meal
    Found(MealRecord),
    /// The service answered, but there is nothing to show for this date
    NoData { date: String },
}

impl MealLookup {
    /// Build the outcome for a parse result, treating an empty record as no data
    pub fn from_parsed(date: &str, record: Option<MealRecord>) -> Self {
        match record {
            Some(record) if !record.is_empty() => MealLookup::Found(record),
            _ => MealLookup::NoData {
                date: date.to_string(),
            },
        }
    }

    pub fn date(&self) -> &str {
        match self {
            MealLookup::Found(record) => record.date(),
            MealLookup::NoData { date } => date,
        }
    }

    pub fn record(&self) -> Option<&MealRecord> {
        match self {
            MealLookup::Found(record) => Some(record),
            MealLookup::NoData { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MealLookup::Found(_))
    }
}
