use chrono::NaiveDate;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use strsim::jaro_winkler;

use crate::error::{Result, UkemenyError};
use crate::models::{Ingredient, Recipe, RecipeIngredient};
use crate::shopping::MEASUREMENTS;

/// Prompt for a line of text.
pub fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for a line of text that may be left empty.
pub fn prompt_optional_text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt to pick one entry from a list of labels.
pub fn prompt_select(prompt: &str, labels: &[String]) -> Result<usize> {
    Ok(Select::new()
        .with_prompt(prompt)
        .items(labels)
        .default(0)
        .interact()?)
}

/// Prompt for a positive amount.
pub fn prompt_amount(prompt: &str) -> Result<f64> {
    let input: String = Input::new().with_prompt(prompt).interact_text()?;

    let amount: f64 = input
        .trim()
        .parse()
        .map_err(|_| UkemenyError::InvalidInput("Invalid number".to_string()))?;

    if !(amount > 0.0 && amount.is_finite()) {
        return Err(UkemenyError::InvalidInput(
            "Amount must be a positive number".to_string(),
        ));
    }

    Ok(amount)
}

/// Prompt for a serving count (at least 1).
pub fn prompt_servings(prompt: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let servings: u32 = input
        .trim()
        .parse()
        .map_err(|_| UkemenyError::InvalidInput("Invalid number".to_string()))?;

    if servings == 0 {
        return Err(UkemenyError::InvalidInput(
            "Servings must be at least 1".to_string(),
        ));
    }

    Ok(servings)
}

/// Prompt for a measurement unit from the catalog. Returns the storage code.
pub fn prompt_unit() -> Result<String> {
    let options: Vec<String> = MEASUREMENTS
        .iter()
        .map(|(code, label)| format!("{} ({})", label, code))
        .collect();

    let selection = Select::new()
        .with_prompt("Unit")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(MEASUREMENTS[selection].0.to_string())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Prompt for an ingredient by name with fuzzy matching against the catalog.
///
/// Returns `None` when the user submits an empty line (finished).
pub fn prompt_pick_ingredient(catalog: &[Ingredient]) -> Result<Option<Ingredient>> {
    loop {
        let input: String = Input::new()
            .with_prompt("Ingredient (or press Enter to finish)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // Try exact match first (case-insensitive)
        let exact_match = catalog
            .iter()
            .find(|i| i.name.to_lowercase() == input.to_lowercase());

        if let Some(ingredient) = exact_match {
            return Ok(Some(ingredient.clone()));
        }

        // Try fuzzy matching
        let mut candidates: Vec<(&Ingredient, f64)> = catalog
            .iter()
            .map(|i| (i, jaro_winkler(&i.name.to_lowercase(), &input.to_lowercase())))
            .filter(|(_, score)| *score > 0.7)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if candidates.is_empty() {
            println!("No matching ingredient found for '{}'", input);
            continue;
        }

        if candidates.len() == 1 {
            let ingredient = candidates[0].0;
            let confirm = Confirm::new()
                .with_prompt(format!("Did you mean '{}'?", ingredient.name))
                .default(true)
                .interact()?;

            if confirm {
                return Ok(Some(ingredient.clone()));
            }
            continue;
        }

        // Multiple matches - let user select
        let options: Vec<String> = candidates
            .iter()
            .take(5)
            .map(|(i, _)| i.name.clone())
            .collect();

        let mut selection_options = options.clone();
        selection_options.push("None of these".to_string());

        let selection = Select::new()
            .with_prompt("Which did you mean?")
            .items(&selection_options)
            .default(0)
            .interact()?;

        if selection < options.len() {
            return Ok(Some(candidates[selection].0.clone()));
        }
    }
}

/// Collect recipe ingredient lines until the user is done.
pub fn prompt_recipe_lines(catalog: &[Ingredient]) -> Result<Vec<RecipeIngredient>> {
    let mut lines = Vec::new();

    while let Some(ingredient) = prompt_pick_ingredient(catalog)? {
        let amount = prompt_amount(&format!("Amount of {}", ingredient.name))?;
        let unit = prompt_unit()?;

        println!("Added: {} {} {}", amount, unit, ingredient.name);
        lines.push(RecipeIngredient {
            ingredient,
            amount,
            unit,
        });
    }

    Ok(lines)
}

/// Prompt to pick a recipe from the saved ones.
pub fn prompt_pick_recipe<'a>(recipes: &'a [Recipe]) -> Result<&'a Recipe> {
    let options: Vec<String> = recipes
        .iter()
        .map(|r| format!("{} ({} servings)", r.title, r.servings))
        .collect();

    let selection = Select::new()
        .with_prompt("Recipe")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(&recipes[selection])
}

/// Prompt to pick a day of the week.
pub fn prompt_pick_day(week: &[NaiveDate; 7]) -> Result<NaiveDate> {
    let options: Vec<String> = week.iter().map(|d| d.format("%A %d.%m.").to_string()).collect();

    let selection = Select::new()
        .with_prompt("Day")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(week[selection])
}

/// Multi-select over shopping list entries, seeded with the current checked
/// state. Returns the new checked state per entry.
pub fn prompt_check_off(labels: &[String], checked: &[bool]) -> Result<Vec<bool>> {
    let selected = MultiSelect::new()
        .with_prompt("Check off items (space toggles, Enter confirms)")
        .items(labels)
        .defaults(checked)
        .interact()?;

    let mut result = vec![false; labels.len()];
    for index in selected {
        result[index] = true;
    }
    Ok(result)
}

/// Prompt for one custom shopping item: name, amount and free-text unit.
pub fn prompt_custom_item() -> Result<(String, f64, String)> {
    let name = prompt_text("Item name")?;
    let amount = prompt_amount("Amount")?;
    let unit: String = Input::new()
        .with_prompt("Unit (free text, e.g. 'stk' or 'pose')")
        .interact_text()?;

    Ok((name, amount, unit.trim().to_string()))
}
