use serde::{Deserialize, Serialize};

use crate::models::Ingredient;

/// One ingredient line of a recipe.
///
/// Carries its resolved catalog ingredient so the shopping-list aggregation
/// can read name and category without a second lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeIngredient {
    pub ingredient: Ingredient,

    pub amount: f64,

    /// Measurement unit storage code (e.g. "g", "dl", "stk").
    pub unit: String,
}

/// A recipe with its native serving count and ingredient lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: u64,

    pub title: String,

    /// The serving count the ingredient amounts are written for.
    pub servings: u32,

    pub ingredients: Vec<RecipeIngredient>,

    #[serde(default)]
    pub instructions: String,
}

impl Recipe {
    /// Canonical key for lookups (lowercase title).
    pub fn key(&self) -> String {
        self.title.to_lowercase()
    }

    /// Basic validation: a nonzero serving count and positive, finite line
    /// amounts.
    ///
    /// A zero serving count would leave the servings ratio undefined, so
    /// invalid recipes are refused at save time and skipped by aggregation.
    pub fn is_valid(&self) -> bool {
        self.servings > 0
            && self
                .ingredients
                .iter()
                .all(|line| line.amount > 0.0 && line.amount.is_finite())
    }
}
