use chrono::{Local, NaiveDate};
use clap::Parser;

use ukemeny_rs::cli::{Cli, Command};
use ukemeny_rs::error::{Result, UkemenyError};
use ukemeny_rs::interface::{
    WeekEntry, display_ingredients, display_recipe, display_recipes, display_shopping_list,
    display_skipped, display_week, prompt_custom_item, prompt_check_off, prompt_optional_text,
    prompt_pick_day, prompt_pick_recipe, prompt_recipe_lines, prompt_select, prompt_servings,
    prompt_text, prompt_yes_no, shopping_item_label,
};
use ukemeny_rs::models::week_of;
use ukemeny_rs::shopping::{AggregationOutcome, aggregate, format_measurement};
use ukemeny_rs::state::{MenuStateManager, load_state, save_state};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan {
            add,
            remove,
            servings,
            clear,
        } => cmd_plan(&cli.file, add, remove, servings, clear),
        Command::Ingredients { add, remove } => cmd_ingredients(&cli.file, add, remove),
        Command::Recipes { add, remove, show } => cmd_recipes(&cli.file, add, remove, show),
        Command::List => cmd_list(&cli.file),
        Command::Shop => cmd_shop(&cli.file),
        Command::Export { output } => cmd_export(&cli.file, &output),
    }
}

fn load_manager(file_path: &str) -> Result<MenuStateManager> {
    Ok(MenuStateManager::new(load_state(file_path)?))
}

fn current_week() -> [NaiveDate; 7] {
    week_of(Local::now().date_naive())
}

/// Join this week's planned meals with their recipe titles for display.
fn week_entries(manager: &MenuStateManager, week: &[NaiveDate; 7]) -> Vec<WeekEntry> {
    manager
        .meals_between(week[0], week[6])
        .into_iter()
        .map(|meal| WeekEntry {
            meal_id: meal.id,
            date: meal.planned_date,
            title: manager
                .get_recipe_by_id(meal.recipe_id)
                .map(|r| r.title.clone())
                .unwrap_or_else(|| format!("recipe #{} (missing)", meal.recipe_id)),
            servings: meal.servings,
        })
        .collect()
}

/// Show or edit the current week's plan.
fn cmd_plan(file_path: &str, add: bool, remove: bool, servings: bool, clear: bool) -> Result<()> {
    let mut manager = load_manager(file_path)?;
    let week = current_week();

    if clear {
        let removed = manager.clear_meals_between(week[0], week[6]);
        save_state(file_path, manager.state())?;
        println!("Removed {} planned meals.", removed);
        return Ok(());
    }

    if add {
        if manager.recipes().is_empty() {
            println!("No recipes yet. Add one with 'recipes --add'.");
            return Ok(());
        }

        let date = prompt_pick_day(&week)?;
        let (title, native_servings) = {
            let recipe = prompt_pick_recipe(manager.recipes())?;
            (recipe.title.clone(), recipe.servings)
        };
        let servings = prompt_servings("Servings", native_servings)?;

        manager.add_planned_meal(&title, date, servings)?;
        save_state(file_path, manager.state())?;
        println!("Planned {} on {}.", title, date.format("%A %d.%m."));
        return Ok(());
    }

    if remove {
        let entries = week_entries(&manager, &week);
        if entries.is_empty() {
            println!("Nothing planned this week.");
            return Ok(());
        }

        let labels: Vec<String> = entries.iter().map(|e| e.label()).collect();
        let selection = prompt_select("Remove which meal?", &labels)?;

        manager.remove_planned_meal(entries[selection].meal_id)?;
        save_state(file_path, manager.state())?;
        println!("Removed {}.", labels[selection]);
        return Ok(());
    }

    if servings {
        let entries = week_entries(&manager, &week);
        if entries.is_empty() {
            println!("Nothing planned this week.");
            return Ok(());
        }

        let labels: Vec<String> = entries.iter().map(|e| e.label()).collect();
        let selection = prompt_select("Change servings for which meal?", &labels)?;
        let new_servings = prompt_servings("Servings", entries[selection].servings)?;

        manager.update_servings(entries[selection].meal_id, new_servings)?;
        save_state(file_path, manager.state())?;
        println!(
            "Updated {} to {} servings.",
            entries[selection].title, new_servings
        );
        return Ok(());
    }

    display_week(&week, &week_entries(&manager, &week));
    Ok(())
}

/// List or edit the ingredient catalog.
fn cmd_ingredients(file_path: &str, add: bool, remove: Option<String>) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    if add {
        let name = prompt_text("Ingredient name")?;
        let category = prompt_text("Category (e.g. Meieri, Grønnsaker)")?;

        let added = manager.add_ingredient(&name, &category)?;
        save_state(file_path, manager.state())?;
        println!("Added ingredient: {}", added.name);
        return Ok(());
    }

    if let Some(name) = remove {
        let removed = manager.remove_ingredient(&name)?;
        save_state(file_path, manager.state())?;
        println!("Removed ingredient: {}", removed.name);
        return Ok(());
    }

    display_ingredients(manager.ingredients());
    Ok(())
}

/// List, show or edit recipes.
fn cmd_recipes(
    file_path: &str,
    add: bool,
    remove: Option<String>,
    show: Option<String>,
) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    if add {
        if manager.ingredients().is_empty() {
            println!("No ingredients yet. Add some with 'ingredients --add' first.");
            return Ok(());
        }

        let title = prompt_text("Recipe title")?;
        let servings = prompt_servings("Native servings (what the amounts are written for)", 4)?;
        let lines = prompt_recipe_lines(manager.ingredients())?;
        if lines.is_empty() {
            println!("No ingredient lines; recipe not saved.");
            return Ok(());
        }
        let instructions = prompt_optional_text("Instructions (optional)")?;

        let added = manager.add_recipe(&title, servings, lines, instructions)?;
        save_state(file_path, manager.state())?;
        println!("Added recipe: {}", added.title);
        return Ok(());
    }

    if let Some(title) = remove {
        let removed = manager.remove_recipe(&title)?;
        save_state(file_path, manager.state())?;
        println!("Removed recipe: {}", removed.title);
        return Ok(());
    }

    if let Some(title) = show {
        let recipe = manager
            .get_recipe(&title)
            .ok_or_else(|| UkemenyError::RecipeNotFound(title.clone()))?;
        display_recipe(recipe);
        return Ok(());
    }

    display_recipes(manager.recipes());
    Ok(())
}

/// Aggregate the current week into a fresh shopping list and persist it.
fn cmd_list(file_path: &str) -> Result<()> {
    let mut manager = load_manager(file_path)?;
    let week = current_week();

    let (resolved, mut skipped) = manager.resolve_meals_between(week[0], week[6]);
    if resolved.is_empty() && skipped.is_empty() {
        println!("Nothing planned this week; shopping list left unchanged.");
        return Ok(());
    }

    let AggregationOutcome {
        items,
        skipped: unaggregatable,
    } = aggregate(&resolved);
    skipped.extend(unaggregatable);

    let count = items.len();
    manager.replace_shopping_list(items);
    save_state(file_path, manager.state())?;

    display_skipped(&skipped);
    display_shopping_list(manager.shopping_list());
    println!("Saved {} items to the shopping list.", count);
    Ok(())
}

/// Interactive shopping: check off items, add custom ones, clear when done.
fn cmd_shop(file_path: &str) -> Result<()> {
    let mut manager = load_manager(file_path)?;

    if manager.shopping_list().is_empty() {
        println!("Shopping list is empty. Run 'list' to build one from the week plan.");
        return Ok(());
    }

    let labels: Vec<String> = manager
        .shopping_list()
        .iter()
        .map(shopping_item_label)
        .collect();
    let checked: Vec<bool> = manager.shopping_list().iter().map(|i| i.checked).collect();
    let ids: Vec<u64> = manager.shopping_list().iter().map(|i| i.id).collect();

    let new_checked = prompt_check_off(&labels, &checked)?;
    for (id, now_checked) in ids.into_iter().zip(new_checked) {
        manager.set_item_checked(id, now_checked)?;
    }

    while prompt_yes_no("Add a custom item?", false)? {
        let (name, amount, unit) = prompt_custom_item()?;
        manager.add_custom_item(&name, amount, &unit)?;
        println!("Added: {} ({})", name, format_measurement(amount, &unit));
    }

    if prompt_yes_no("Done shopping? This clears the list.", false)? {
        manager.clear_shopping_list();
        save_state(file_path, manager.state())?;
        println!("Shopping list cleared.");
        return Ok(());
    }

    save_state(file_path, manager.state())?;
    display_shopping_list(manager.shopping_list());
    Ok(())
}

/// Export the shopping list to a CSV file.
fn cmd_export(file_path: &str, output: &str) -> Result<()> {
    let manager = load_manager(file_path)?;

    if manager.shopping_list().is_empty() {
        println!("Shopping list is empty; nothing to export.");
        return Ok(());
    }

    let mut wtr = csv::Writer::from_path(output)?;
    wtr.write_record(["category", "name", "amount", "unit", "formatted", "checked"])?;

    for item in manager.shopping_list() {
        wtr.write_record([
            item.category.clone(),
            item.name.clone(),
            item.amount.to_string(),
            item.unit.clone(),
            format_measurement(item.amount, &item.unit),
            if item.checked { "x" } else { "" }.to_string(),
        ])?;
    }

    wtr.flush()?;
    println!(
        "Wrote {} items to {}",
        manager.shopping_list().len(),
        output
    );
    Ok(())
}
