use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Meal slots a feeding can be logged against, stored as a single-letter code
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Meal {
    #[default]
    #[serde(rename = "B")]
    Breakfast,
    #[serde(rename = "L")]
    Lunch,
    #[serde(rename = "D")]
    Dinner,
}

impl Meal {
    pub const ALL: [Meal; 3] = [Meal::Breakfast, Meal::Lunch, Meal::Dinner];

    pub fn code(self) -> &'static str {
        match self {
            Meal::Breakfast => "B",
            Meal::Lunch => "L",
            Meal::Dinner => "D",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Meal::Breakfast => "Breakfast",
            Meal::Lunch => "Lunch",
            Meal::Dinner => "Dinner",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|meal| meal.code() == code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feeding {
    pub id: i64,
    pub date: NaiveDate,
    pub meal: Meal,
    pub cat_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeeding {
    pub date: NaiveDate,
    pub meal: Meal,
}

impl Feeding {
    /// Most recent date first; ids break ties so later entries come first.
    pub fn display_order(a: &Feeding, b: &Feeding) -> Ordering {
        b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id))
    }
}

impl std::fmt::Display for Feeding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.meal.label(), self.date.format("%Y-%m-%d"))
    }
}
