use chrono::NaiveDate;
use serde::Deserialize;

use super::{FormErrors, REQUIRED};
use crate::database::models::{Meal, NewFeeding};

/// Accepted date input formats, tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y"];

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct FeedingForm {
    pub date: Option<String>,
    pub meal: Option<String>,
}

impl FeedingForm {
    pub fn validate(&self) -> Result<NewFeeding, FormErrors> {
        let mut errors = FormErrors::new();

        let date = match self.date.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => {
                errors.add("date", REQUIRED);
                None
            }
            Some(raw) => {
                let parsed = parse_date(raw);
                if parsed.is_none() {
                    errors.add("date", "Enter a valid date.");
                }
                parsed
            }
        };

        let meal = match self.meal.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            None => {
                errors.add("meal", REQUIRED);
                None
            }
            Some(code) => {
                let meal = Meal::from_code(code);
                if meal.is_none() {
                    errors.add(
                        "meal",
                        format!("Select a valid choice. {code} is not one of the available choices."),
                    );
                }
                meal
            }
        };

        match (date, meal) {
            (Some(date), Some(meal)) if errors.is_empty() => Ok(NewFeeding { date, meal }),
            _ => Err(errors),
        }
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
}
