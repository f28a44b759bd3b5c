use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UkemenyError};
use crate::models::{Ingredient, PlannedMeal, Recipe, RecipeIngredient, ShoppingItem};
use crate::shopping::{AggregatedItem, PlannedServing, SkipReason, SkippedMeal};

/// Category used for custom shopping items typed in while shopping.
pub const CUSTOM_ITEM_CATEGORY: &str = "Annet";

/// Everything the application persists, as one JSON document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuState {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,

    #[serde(default)]
    pub recipes: Vec<Recipe>,

    #[serde(default)]
    pub planned_meals: Vec<PlannedMeal>,

    #[serde(default)]
    pub shopping_list: Vec<ShoppingItem>,
}

/// Manages the ingredient catalog, recipes, the week plan and the shopping
/// list.
pub struct MenuStateManager {
    state: MenuState,
}

fn next_id(ids: impl Iterator<Item = u64>) -> u64 {
    ids.max().map_or(1, |max| max + 1)
}

impl MenuStateManager {
    pub fn new(state: MenuState) -> Self {
        Self { state }
    }

    /// The state as persisted, for handing to `save_state`.
    pub fn state(&self) -> &MenuState {
        &self.state
    }

    // ── Ingredient catalog ──────────────────────────────────────────────

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.state.ingredients
    }

    /// Get an ingredient by name (case-insensitive).
    pub fn get_ingredient(&self, name: &str) -> Option<&Ingredient> {
        let key = name.to_lowercase();
        self.state.ingredients.iter().find(|i| i.key() == key)
    }

    /// Add an ingredient to the catalog. Names are unique case-insensitively.
    pub fn add_ingredient(&mut self, name: &str, category: &str) -> Result<Ingredient> {
        let name = name.trim();
        let category = category.trim();

        if name.is_empty() || category.is_empty() {
            return Err(UkemenyError::InvalidInput(
                "Ingredient name and category must not be empty".to_string(),
            ));
        }
        if self.get_ingredient(name).is_some() {
            return Err(UkemenyError::InvalidInput(format!(
                "Ingredient already exists: {}",
                name
            )));
        }

        // Ids referenced from recipe lines stay reserved even if the catalog
        // entry was removed, so a new ingredient never inherits one.
        let id = next_id(
            self.state.ingredients.iter().map(|i| i.id).chain(
                self.state
                    .recipes
                    .iter()
                    .flat_map(|r| r.ingredients.iter().map(|l| l.ingredient.id)),
            ),
        );
        let ingredient = Ingredient::new(id, name, category);
        self.state.ingredients.push(ingredient.clone());
        Ok(ingredient)
    }

    /// Remove an ingredient by name. Refused while any recipe references it.
    pub fn remove_ingredient(&mut self, name: &str) -> Result<Ingredient> {
        let ingredient = self
            .get_ingredient(name)
            .cloned()
            .ok_or_else(|| UkemenyError::IngredientNotFound(name.to_string()))?;

        let used_by: Vec<&str> = self
            .state
            .recipes
            .iter()
            .filter(|r| r.ingredients.iter().any(|l| l.ingredient.id == ingredient.id))
            .map(|r| r.title.as_str())
            .collect();

        if !used_by.is_empty() {
            return Err(UkemenyError::InvalidInput(format!(
                "{} is used by: {}",
                ingredient.name,
                used_by.join(", ")
            )));
        }

        self.state.ingredients.retain(|i| i.id != ingredient.id);
        Ok(ingredient)
    }

    // ── Recipes ─────────────────────────────────────────────────────────

    pub fn recipes(&self) -> &[Recipe] {
        &self.state.recipes
    }

    /// Get a recipe by title (case-insensitive).
    pub fn get_recipe(&self, title: &str) -> Option<&Recipe> {
        let key = title.to_lowercase();
        self.state.recipes.iter().find(|r| r.key() == key)
    }

    pub fn get_recipe_by_id(&self, id: u64) -> Option<&Recipe> {
        self.state.recipes.iter().find(|r| r.id == id)
    }

    /// Add a recipe. Titles are unique case-insensitively, and the recipe
    /// must pass validation so a zero serving count can never be saved.
    pub fn add_recipe(
        &mut self,
        title: &str,
        servings: u32,
        ingredients: Vec<RecipeIngredient>,
        instructions: String,
    ) -> Result<Recipe> {
        let title = title.trim();
        if title.is_empty() {
            return Err(UkemenyError::InvalidInput(
                "Recipe title must not be empty".to_string(),
            ));
        }
        if self.get_recipe(title).is_some() {
            return Err(UkemenyError::InvalidInput(format!(
                "Recipe already exists: {}",
                title
            )));
        }

        // Ids referenced from planned meals stay reserved even after the
        // recipe was removed, so a dangling meal can never resolve to a
        // different recipe later.
        let recipe = Recipe {
            id: next_id(
                self.state
                    .recipes
                    .iter()
                    .map(|r| r.id)
                    .chain(self.state.planned_meals.iter().map(|m| m.recipe_id)),
            ),
            title: title.to_string(),
            servings,
            ingredients,
            instructions,
        };
        if !recipe.is_valid() {
            return Err(UkemenyError::InvalidInput(format!(
                "Recipe needs a serving count of at least 1 and positive amounts: {}",
                title
            )));
        }

        self.state.recipes.push(recipe.clone());
        Ok(recipe)
    }

    /// Remove a recipe by title.
    ///
    /// Planned meals referencing it are left in place; aggregation reports
    /// them as skipped instead of failing.
    pub fn remove_recipe(&mut self, title: &str) -> Result<Recipe> {
        let recipe = self
            .get_recipe(title)
            .cloned()
            .ok_or_else(|| UkemenyError::RecipeNotFound(title.to_string()))?;

        self.state.recipes.retain(|r| r.id != recipe.id);
        Ok(recipe)
    }

    // ── Week plan ───────────────────────────────────────────────────────

    pub fn planned_meals(&self) -> &[PlannedMeal] {
        &self.state.planned_meals
    }

    /// Planned meals with a date in `[start, end]`, in insertion order.
    pub fn meals_between(&self, start: NaiveDate, end: NaiveDate) -> Vec<&PlannedMeal> {
        self.state
            .planned_meals
            .iter()
            .filter(|m| m.planned_date >= start && m.planned_date <= end)
            .collect()
    }

    /// Schedule a recipe for a day.
    pub fn add_planned_meal(
        &mut self,
        recipe_title: &str,
        planned_date: NaiveDate,
        servings: u32,
    ) -> Result<PlannedMeal> {
        if servings == 0 {
            return Err(UkemenyError::InvalidInput(
                "Planned servings must be at least 1".to_string(),
            ));
        }
        let recipe_id = self
            .get_recipe(recipe_title)
            .map(|r| r.id)
            .ok_or_else(|| UkemenyError::RecipeNotFound(recipe_title.to_string()))?;

        let meal = PlannedMeal {
            id: next_id(self.state.planned_meals.iter().map(|m| m.id)),
            recipe_id,
            planned_date,
            servings,
        };
        self.state.planned_meals.push(meal.clone());
        Ok(meal)
    }

    /// Change the serving count of a planned meal.
    pub fn update_servings(&mut self, meal_id: u64, servings: u32) -> Result<()> {
        if servings == 0 {
            return Err(UkemenyError::InvalidInput(
                "Planned servings must be at least 1".to_string(),
            ));
        }
        let meal = self
            .state
            .planned_meals
            .iter_mut()
            .find(|m| m.id == meal_id)
            .ok_or_else(|| {
                UkemenyError::InvalidInput(format!("No planned meal with id {}", meal_id))
            })?;
        meal.servings = servings;
        Ok(())
    }

    pub fn remove_planned_meal(&mut self, meal_id: u64) -> Result<()> {
        let before = self.state.planned_meals.len();
        self.state.planned_meals.retain(|m| m.id != meal_id);
        if self.state.planned_meals.len() == before {
            return Err(UkemenyError::InvalidInput(format!(
                "No planned meal with id {}",
                meal_id
            )));
        }
        Ok(())
    }

    /// Remove every planned meal in `[start, end]`. Returns how many went.
    pub fn clear_meals_between(&mut self, start: NaiveDate, end: NaiveDate) -> usize {
        let before = self.state.planned_meals.len();
        self.state
            .planned_meals
            .retain(|m| m.planned_date < start || m.planned_date > end);
        before - self.state.planned_meals.len()
    }

    /// Resolve planned meals in `[start, end]` to their recipes.
    ///
    /// Dangling recipe references become skip reports here, so the
    /// aggregation input graph only ever contains resolved recipes.
    pub fn resolve_meals_between(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> (Vec<PlannedServing<'_>>, Vec<SkippedMeal>) {
        let mut servings = Vec::new();
        let mut skipped = Vec::new();

        for meal in self.meals_between(start, end) {
            match self.get_recipe_by_id(meal.recipe_id) {
                Some(recipe) => servings.push(PlannedServing {
                    recipe,
                    servings: meal.servings,
                }),
                None => skipped.push(SkippedMeal {
                    recipe: format!("recipe #{}", meal.recipe_id),
                    reason: SkipReason::MissingRecipe,
                }),
            }
        }

        (servings, skipped)
    }

    // ── Shopping list ───────────────────────────────────────────────────

    pub fn shopping_list(&self) -> &[ShoppingItem] {
        &self.state.shopping_list
    }

    /// Replace the whole list with a fresh aggregation result.
    ///
    /// Mirrors the recompute-from-scratch model: prior contents (including
    /// checked-off state and custom items) are dropped, not diffed.
    pub fn replace_shopping_list(&mut self, items: Vec<AggregatedItem>) {
        self.state.shopping_list = items
            .into_iter()
            .enumerate()
            .map(|(i, item)| ShoppingItem {
                id: i as u64 + 1,
                ingredient_id: Some(item.ingredient_id),
                name: item.name,
                category: item.category,
                amount: item.total_amount,
                unit: item.unit,
                checked: false,
            })
            .collect();
    }

    /// Check or uncheck a shopping list item.
    pub fn set_item_checked(&mut self, item_id: u64, checked: bool) -> Result<()> {
        let item = self
            .state
            .shopping_list
            .iter_mut()
            .find(|i| i.id == item_id)
            .ok_or_else(|| {
                UkemenyError::InvalidInput(format!("No shopping item with id {}", item_id))
            })?;
        item.checked = checked;
        Ok(())
    }

    /// Add a free-form item to the list. Its unit may fall outside the
    /// measurement catalog; formatting falls back to the raw code.
    pub fn add_custom_item(&mut self, name: &str, amount: f64, unit: &str) -> Result<ShoppingItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UkemenyError::InvalidInput(
                "Item name must not be empty".to_string(),
            ));
        }
        if !(amount > 0.0 && amount.is_finite()) {
            return Err(UkemenyError::InvalidInput(
                "Amount must be a positive number".to_string(),
            ));
        }

        let item = ShoppingItem {
            id: next_id(self.state.shopping_list.iter().map(|i| i.id)),
            ingredient_id: None,
            name: name.to_string(),
            category: CUSTOM_ITEM_CATEGORY.to_string(),
            amount,
            unit: unit.trim().to_string(),
            checked: false,
        };
        self.state.shopping_list.push(item.clone());
        Ok(item)
    }

    pub fn clear_shopping_list(&mut self) {
        self.state.shopping_list.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_with_recipe() -> MenuStateManager {
        let mut manager = MenuStateManager::new(MenuState::default());
        manager.add_ingredient("Hvetemel", "Tørrvarer").unwrap();
        manager.add_ingredient("Melk", "Meieri").unwrap();

        let lines = vec![
            RecipeIngredient {
                ingredient: manager.get_ingredient("Hvetemel").unwrap().clone(),
                amount: 250.0,
                unit: "g".to_string(),
            },
            RecipeIngredient {
                ingredient: manager.get_ingredient("Melk").unwrap().clone(),
                amount: 4.0,
                unit: "dl".to_string(),
            },
        ];
        manager
            .add_recipe("Pannekaker", 4, lines, "Visp og stek.".to_string())
            .unwrap();
        manager
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn test_ingredient_lookup_is_case_insensitive() {
        let manager = manager_with_recipe();
        assert!(manager.get_ingredient("hvetemel").is_some());
        assert!(manager.get_ingredient("HVETEMEL").is_some());
        assert!(manager.get_ingredient("smør").is_none());
    }

    #[test]
    fn test_duplicate_ingredient_rejected() {
        let mut manager = manager_with_recipe();
        assert!(manager.add_ingredient("melk", "Meieri").is_err());
    }

    #[test]
    fn test_remove_ingredient_in_use_refused() {
        let mut manager = manager_with_recipe();
        assert!(manager.remove_ingredient("Melk").is_err());

        manager.add_ingredient("Sukker", "Tørrvarer").unwrap();
        assert!(manager.remove_ingredient("Sukker").is_ok());
    }

    #[test]
    fn test_zero_serving_recipe_rejected_at_save() {
        let mut manager = manager_with_recipe();
        let result = manager.add_recipe("Ødelagt", 0, Vec::new(), String::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_add_planned_meal_validates() {
        let mut manager = manager_with_recipe();
        assert!(manager.add_planned_meal("Pannekaker", day(3), 0).is_err());
        assert!(manager.add_planned_meal("Taco", day(3), 4).is_err());
        assert!(manager.add_planned_meal("pannekaker", day(3), 6).is_ok());
    }

    #[test]
    fn test_meals_between_filters_by_date() {
        let mut manager = manager_with_recipe();
        manager.add_planned_meal("Pannekaker", day(3), 4).unwrap();
        manager.add_planned_meal("Pannekaker", day(10), 4).unwrap();

        assert_eq!(manager.meals_between(day(3), day(9)).len(), 1);
        assert_eq!(manager.meals_between(day(3), day(10)).len(), 2);
    }

    #[test]
    fn test_resolve_reports_dangling_recipe() {
        let mut manager = manager_with_recipe();
        manager.add_planned_meal("Pannekaker", day(3), 4).unwrap();
        manager.remove_recipe("Pannekaker").unwrap();

        let (servings, skipped) = manager.resolve_meals_between(day(3), day(9));
        assert!(servings.is_empty());
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].reason, SkipReason::MissingRecipe);
    }

    #[test]
    fn test_removed_recipe_id_is_not_reused_while_referenced() {
        let mut manager = manager_with_recipe();
        manager.add_planned_meal("Pannekaker", day(3), 4).unwrap();
        let old_id = manager.get_recipe("Pannekaker").unwrap().id;
        manager.remove_recipe("Pannekaker").unwrap();

        let new = manager
            .add_recipe("Taco", 4, Vec::new(), String::new())
            .unwrap();
        assert_ne!(new.id, old_id);

        // The dangling meal still resolves to a skip report, not to Taco
        let (servings, skipped) = manager.resolve_meals_between(day(3), day(9));
        assert!(servings.is_empty());
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn test_replace_shopping_list_resets_checked_state() {
        let mut manager = manager_with_recipe();
        manager.replace_shopping_list(vec![AggregatedItem {
            ingredient_id: 1,
            name: "Hvetemel".to_string(),
            category: "Tørrvarer".to_string(),
            total_amount: 500.0,
            unit: "g".to_string(),
        }]);
        manager.set_item_checked(1, true).unwrap();
        assert!(manager.shopping_list()[0].checked);

        manager.replace_shopping_list(Vec::new());
        assert!(manager.shopping_list().is_empty());
    }

    #[test]
    fn test_add_custom_item() {
        let mut manager = manager_with_recipe();
        let item = manager.add_custom_item("Tørkerull", 2.0, "pose").unwrap();
        assert_eq!(item.category, CUSTOM_ITEM_CATEGORY);
        assert!(item.ingredient_id.is_none());

        assert!(manager.add_custom_item("", 1.0, "stk").is_err());
        assert!(manager.add_custom_item("Melk", 0.0, "l").is_err());
        assert!(manager.add_custom_item("Melk", f64::NAN, "l").is_err());
    }

    #[test]
    fn test_update_servings() {
        let mut manager = manager_with_recipe();
        let meal_id = manager
            .add_planned_meal("Pannekaker", day(3), 4)
            .unwrap()
            .id;

        manager.update_servings(meal_id, 8).unwrap();
        assert_eq!(manager.planned_meals()[0].servings, 8);
        assert!(manager.update_servings(meal_id, 0).is_err());
    }
}
