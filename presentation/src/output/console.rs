//! Console output formatter for meal lookups

use crate::output::date::format_long_date;
use colored::Colorize;
use meal_application::LookupMealsError;
use meal_domain::{MealDate, MealLookup, MealRecord};
use serde::Serialize;

pub const SELECT_DATE_MESSAGE: &str = "날짜를 선택해주세요.";
pub const NO_DATA_MESSAGE: &str = "해당 날짜에 급식 정보가 없습니다.";
pub const LOAD_FAILED_MESSAGE: &str = "급식 정보를 불러오는데 실패했습니다. 다시 시도해주세요.";

/// JSON view of a lookup; menu items are the cleaned display names
#[derive(Debug, Serialize)]
struct LookupView<'a> {
    date: &'a str,
    found: bool,
    meals: Vec<MealView<'a>>,
}

#[derive(Debug, Serialize)]
struct MealView<'a> {
    #[serde(rename = "type")]
    meal_type: &'a str,
    menu: Vec<String>,
}

impl<'a> LookupView<'a> {
    fn new(lookup: &'a MealLookup) -> Self {
        let meals = lookup
            .record()
            .map(|record| {
                record
                    .meals()
                    .iter()
                    .map(|meal| MealView {
                        meal_type: meal.meal_type(),
                        menu: meal.cleaned_items(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            date: lookup.date(),
            found: lookup.is_found(),
            meals,
        }
    }
}

/// Formats meal lookups for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format a lookup as grouped, cleaned menu text
    pub fn format(lookup: &MealLookup) -> String {
        match lookup {
            MealLookup::Found(record) => Self::format_record(record),
            MealLookup::NoData { date } => {
                format!("{}\n\n{}\n", Self::header(date), NO_DATA_MESSAGE.yellow())
            }
        }
    }

    /// Format every meal group of a record
    pub fn format_record(record: &MealRecord) -> String {
        let mut output = Self::header(record.date());
        output.push('\n');

        for meal in record.meals() {
            output.push_str(&format!(
                "\n{}\n",
                format!("[{}]", meal.meal_type()).yellow().bold()
            ));
            for item in meal.cleaned_items() {
                output.push_str(&format!("  * {}\n", item));
            }
        }

        output
    }

    /// Format as JSON
    pub fn format_json(lookup: &MealLookup) -> String {
        serde_json::to_string_pretty(&LookupView::new(lookup)).unwrap_or_else(|_| "{}".to_string())
    }

    /// User-facing message for a failed lookup
    pub fn format_error(error: &LookupMealsError) -> String {
        match error {
            LookupMealsError::EmptyInput => SELECT_DATE_MESSAGE.to_string(),
            LookupMealsError::InvalidDate(input) => {
                format!("올바른 날짜가 아닙니다 (YYYY-MM-DD): {}", input)
            }
            LookupMealsError::Network(_) => LOAD_FAILED_MESSAGE.to_string(),
        }
    }

    /// Long-form date heading, falling back to the raw date string
    fn header(date: &str) -> String {
        let title = MealDate::parse(date)
            .map(|d| format_long_date(d.date()))
            .unwrap_or_else(|_| date.to_string());
        let line = "=".repeat(40);
        format!("{}\n{}\n{}", line.cyan(), title.bold(), line.cyan())
    }
}
