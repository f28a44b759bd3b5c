use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One recipe scheduled for one day at a chosen serving count.
///
/// The serving count may differ from the recipe's native one; aggregation
/// scales every ingredient line by the ratio between the two.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedMeal {
    pub id: u64,

    pub recipe_id: u64,

    pub planned_date: NaiveDate,

    pub servings: u32,
}

/// A persisted shopping list row.
///
/// `ingredient_id` is `None` for custom items typed in while shopping; their
/// units may fall outside the measurement catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingItem {
    pub id: u64,

    pub ingredient_id: Option<u64>,

    pub name: String,

    pub category: String,

    pub amount: f64,

    pub unit: String,

    #[serde(default)]
    pub checked: bool,
}

/// The Monday-started week containing `date`.
pub fn week_of(date: NaiveDate) -> [NaiveDate; 7] {
    let monday = date - Duration::days(i64::from(date.weekday().num_days_from_monday()));
    std::array::from_fn(|i| monday + Duration::days(i as i64))
}
