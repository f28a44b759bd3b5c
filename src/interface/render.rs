use chrono::NaiveDate;

use crate::models::{Ingredient, Recipe, ShoppingItem};
use crate::shopping::{SkippedMeal, format_measurement};

/// A planned meal joined with its recipe title for display and selection.
#[derive(Debug, Clone)]
pub struct WeekEntry {
    pub meal_id: u64,
    pub date: NaiveDate,
    pub title: String,
    pub servings: u32,
}

impl WeekEntry {
    /// One-line label, also used in selection prompts.
    pub fn label(&self) -> String {
        format!(
            "{} {} ({} servings)",
            self.date.format("%A"),
            self.title,
            self.servings
        )
    }
}

/// Display the week plan, one block per day.
pub fn display_week(week: &[NaiveDate; 7], entries: &[WeekEntry]) {
    println!();
    println!("=== Week Plan ===");
    println!();

    for date in week {
        println!("{}", date.format("%A %d.%m."));

        let mut any = false;
        for entry in entries.iter().filter(|e| e.date == *date) {
            println!("  {} ({} servings)", entry.title, entry.servings);
            any = true;
        }
        if !any {
            println!("  (nothing planned)");
        }
    }

    println!();
}

/// Display the shopping list grouped by ingredient category.
///
/// Categories keep the order they first appear in, matching the stable
/// ordering of the aggregation itself.
pub fn display_shopping_list(items: &[ShoppingItem]) {
    if items.is_empty() {
        println!("Shopping list is empty. Run 'list' to build one from the week plan.");
        return;
    }

    println!();
    println!("=== Shopping List ===");

    let mut categories: Vec<&str> = Vec::new();
    for item in items {
        if !categories.contains(&item.category.as_str()) {
            categories.push(&item.category);
        }
    }

    for category in categories {
        println!();
        println!("{}:", category);
        for item in items.iter().filter(|i| i.category == category) {
            let mark = if item.checked { "x" } else { " " };
            println!("  [{}] {}", mark, shopping_item_label(item));
        }
    }

    println!();
    let done = items.iter().filter(|i| i.checked).count();
    println!("{} of {} items checked", done, items.len());
    println!();
}

/// One-line label for a shopping item, also used in the check-off prompt.
pub fn shopping_item_label(item: &ShoppingItem) -> String {
    format!(
        "{} - {}",
        item.name,
        format_measurement(item.amount, &item.unit)
    )
}

/// Display a recipe with its ingredient lines and instructions.
pub fn display_recipe(recipe: &Recipe) {
    println!();
    println!("=== {} ({} servings) ===", recipe.title, recipe.servings);
    println!();

    for line in &recipe.ingredients {
        println!(
            "  {} {}",
            format_measurement(line.amount, &line.unit),
            line.ingredient.name
        );
    }

    if !recipe.instructions.is_empty() {
        println!();
        println!("{}", recipe.instructions);
    }

    println!();
}

/// Display the ingredient catalog.
pub fn display_ingredients(ingredients: &[Ingredient]) {
    if ingredients.is_empty() {
        println!("No ingredients yet. Add one with 'ingredients --add'.");
        return;
    }

    println!();
    println!("=== Ingredients ({}) ===", ingredients.len());
    println!();

    for ingredient in ingredients {
        println!("  {} ({})", ingredient.name, ingredient.category);
    }

    println!();
}

/// Display the recipe collection as a one-line-per-recipe overview.
pub fn display_recipes(recipes: &[Recipe]) {
    if recipes.is_empty() {
        println!("No recipes yet. Add one with 'recipes --add'.");
        return;
    }

    println!();
    println!("=== Recipes ({}) ===", recipes.len());
    println!();

    for recipe in recipes {
        println!(
            "  {} ({} servings, {} ingredients)",
            recipe.title,
            recipe.servings,
            recipe.ingredients.len()
        );
    }

    println!();
}

/// Display warnings for planned meals that were left out of an aggregation.
pub fn display_skipped(skipped: &[SkippedMeal]) {
    for meal in skipped {
        eprintln!("Warning: skipped {}: {}", meal.recipe, meal.reason);
    }
}
