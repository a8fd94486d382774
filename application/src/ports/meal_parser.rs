//! Meal document parser port

use meal_domain::MealRecord;

/// Turns a raw meal document into a [`MealRecord`]
///
/// Returns `None` when the document carries no meal data: an explicit
/// non-success status, no rows, or markup that cannot be read at all.
/// Parsing never fails loudly.
pub trait MealDocumentParser: Send + Sync {
    fn parse(&self, document: &str, date: &str) -> Option<MealRecord>;
}
