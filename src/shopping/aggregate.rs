use std::collections::HashMap;
use std::fmt;

use crate::models::Recipe;
use crate::shopping::units::to_base;

/// One planned meal resolved to its recipe, ready for aggregation.
///
/// Resolution (looking the recipe up from the planned meal's reference) is
/// the store's job; the aggregation itself is a pure computation.
#[derive(Debug, Clone, Copy)]
pub struct PlannedServing<'a> {
    pub recipe: &'a Recipe,

    /// Planned serving count, possibly different from the recipe's native
    /// one.
    pub servings: u32,
}

/// One line of the computed shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatedItem {
    pub ingredient_id: u64,

    pub name: String,

    pub category: String,

    /// Running total in `unit`.
    pub total_amount: f64,

    /// Base unit for normalizable quantities, the native unit otherwise.
    pub unit: String,
}

/// Why a planned meal was left out of an aggregation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The planned meal references a recipe that no longer exists.
    MissingRecipe,

    /// The recipe's native serving count is zero, so no servings ratio
    /// exists for it.
    ZeroServings,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingRecipe => write!(f, "recipe no longer exists"),
            SkipReason::ZeroServings => write!(f, "recipe has a serving count of zero"),
        }
    }
}

/// A planned meal excluded from aggregation, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedMeal {
    /// Recipe title, or a placeholder when the recipe itself is gone.
    pub recipe: String,

    pub reason: SkipReason,
}

/// The outcome of one aggregation run: the computed list plus any planned
/// meals that were excluded.
///
/// One bad entry never blocks the rest of the batch; callers decide how
/// loudly to report the skipped meals.
#[derive(Debug, Default)]
pub struct AggregationOutcome {
    pub items: Vec<AggregatedItem>,

    pub skipped: Vec<SkippedMeal>,
}

/// Fold planned meals into per-ingredient totals.
///
/// Every recipe line is scaled by planned/native servings, converted to its
/// base unit when one exists, and accumulated under the key
/// (ingredient id, base-or-native unit). The key includes the unit so the
/// same ingredient measured in incompatible unit families (grams vs.
/// pieces) is never summed together.
///
/// First-seen key order is preserved: output ordering is deterministic for a
/// given input order, and per-key totals are invariant to meal order.
pub fn aggregate(meals: &[PlannedServing<'_>]) -> AggregationOutcome {
    let mut items: Vec<AggregatedItem> = Vec::new();
    let mut index: HashMap<(u64, String), usize> = HashMap::new();
    let mut skipped = Vec::new();

    for meal in meals {
        if meal.recipe.servings == 0 {
            skipped.push(SkippedMeal {
                recipe: meal.recipe.title.clone(),
                reason: SkipReason::ZeroServings,
            });
            continue;
        }

        let ratio = f64::from(meal.servings) / f64::from(meal.recipe.servings);

        for line in &meal.recipe.ingredients {
            let (amount, unit) = to_base(line.amount * ratio, &line.unit);
            let key = (line.ingredient.id, unit.to_string());

            match index.get(&key) {
                Some(&slot) => items[slot].total_amount += amount,
                None => {
                    index.insert(key, items.len());
                    items.push(AggregatedItem {
                        ingredient_id: line.ingredient.id,
                        name: line.ingredient.name.clone(),
                        category: line.ingredient.category.clone(),
                        total_amount: amount,
                        unit: unit.to_string(),
                    });
                }
            }
        }
    }

    AggregationOutcome { items, skipped }
}
