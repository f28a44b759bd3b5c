use serde::{Deserialize, Serialize};

/// A catalog ingredient that recipes reference and shopping lists group by.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub id: u64,

    pub name: String,

    /// Display grouping on the shopping list (e.g. "Meieri", "Grønnsaker").
    pub category: String,
}

impl Ingredient {
    pub fn new(id: u64, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: category.into(),
        }
    }

    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }
}
