//! Meal entities
//!
//! A [`MealRecord`] is assembled once per query through a
//! [`MealRecordBuilder`] and is read-only afterwards.

use super::cleaner::clean_menu_item;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single dish name as extracted from the meal service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItem {
    raw: String,
}

impl MenuItem {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The dish name as extracted, allergen codes included
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The dish name for display, allergen codes stripped
    pub fn cleaned(&self) -> String {
        clean_menu_item(&self.raw)
    }
}

/// All dishes served under one meal-type label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealGroup {
    meal_type: String,
    items: Vec<MenuItem>,
}

impl MealGroup {
    pub fn new(meal_type: impl Into<String>) -> Self {
        Self {
            meal_type: meal_type.into(),
            items: Vec::new(),
        }
    }

    pub fn meal_type(&self) -> &str {
        &self.meal_type
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Cleaned dish names in source order
    pub fn cleaned_items(&self) -> Vec<String> {
        self.items.iter().map(MenuItem::cleaned).collect()
    }
}

/// Every meal served on one queried date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealRecord {
    date: String,
    meals: Vec<MealGroup>,
}

impl MealRecord {
    /// The queried date in its original `YYYY-MM-DD` form
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Meal groups in the order their labels were first seen
    pub fn meals(&self) -> &[MealGroup] {
        &self.meals
    }

    pub fn meal(&self, meal_type: &str) -> Option<&MealGroup> {
        self.meals.iter().find(|m| m.meal_type == meal_type)
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }
}

/// Assembles a [`MealRecord`] row by row
///
/// Holds at most one group per meal-type label. Groups keep the order in
/// which their label first appeared; items for a repeated label are appended
/// to the existing group. Duplicate dish names are kept.
#[derive(Debug, Default)]
pub struct MealRecordBuilder {
    date: String,
    meals: Vec<MealGroup>,
    index: HashMap<String, usize>,
}

impl MealRecordBuilder {
    pub fn new(date: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            meals: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append dishes to the group for `meal_type`, creating it if needed
    pub fn append<I, S>(&mut self, meal_type: &str, items: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let idx = match self.index.get(meal_type) {
            Some(&idx) => idx,
            None => {
                self.meals.push(MealGroup::new(meal_type));
                let idx = self.meals.len() - 1;
                self.index.insert(meal_type.to_string(), idx);
                idx
            }
        };

        self.meals[idx]
            .items
            .extend(items.into_iter().map(MenuItem::new));
        self
    }

    pub fn group_count(&self) -> usize {
        self.meals.len()
    }

    pub fn build(self) -> MealRecord {
        MealRecord {
            date: self.date,
            meals: self.meals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_label_appends_to_existing_group() {
        let mut builder = MealRecordBuilder::new("2024-03-15");
        builder
            .append("조식", ["A", "B"])
            .append("중식", ["C"])
            .append("조식", ["D"]);
        let record = builder.build();

        assert_eq!(record.meals().len(), 2);
        assert_eq!(record.meals()[0].meal_type(), "조식");
        assert_eq!(record.meals()[1].meal_type(), "중식");

        let breakfast: Vec<_> = record.meals()[0].items().iter().map(|i| i.raw()).collect();
        assert_eq!(breakfast, vec!["A", "B", "D"]);
    }

    #[test]
    fn test_duplicate_dishes_are_kept() {
        let mut builder = MealRecordBuilder::new("2024-03-15");
        builder.append("중식", ["김치"]).append("중식", ["김치"]);
        let record = builder.build();

        assert_eq!(record.meal("중식").unwrap().items().len(), 2);
    }

    #[test]
    fn test_first_seen_order_preserved() {
        let mut builder = MealRecordBuilder::new("2024-03-15");
        builder
            .append("석식", ["X"])
            .append("조식", ["Y"])
            .append("석식", ["Z"])
            .append("중식", ["W"]);
        let record = builder.build();

        let labels: Vec<_> = record.meals().iter().map(|m| m.meal_type()).collect();
        assert_eq!(labels, vec!["석식", "조식", "중식"]);
    }

    #[test]
    fn test_menu_item_raw_and_cleaned() {
        let item = MenuItem::new("미역국 5.6.");
        assert_eq!(item.raw(), "미역국 5.6.");
        assert_eq!(item.cleaned(), "미역국");
    }

    #[test]
    fn test_cleaned_items() {
        let mut builder = MealRecordBuilder::new("2024-03-15");
        builder.append("조식", ["쌀밥", "미역국 5.6."]);
        let record = builder.build();

        assert_eq!(
            record.meal("조식").unwrap().cleaned_items(),
            vec!["쌀밥".to_string(), "미역국".to_string()]
        );
    }

    #[test]
    fn test_empty_builder() {
        let builder = MealRecordBuilder::new("2024-03-15");
        assert_eq!(builder.group_count(), 0);
        let record = builder.build();
        assert!(record.is_empty());
        assert_eq!(record.date(), "2024-03-15");
    }
}
