use clap::{Parser, Subcommand};

/// Ukemeny, a weekly menu planning CLI that turns planned meals into an
/// aggregated shopping list.
#[derive(Parser, Debug)]
#[command(name = "ukemeny")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the menu state JSON file.
    #[arg(short, long, default_value = "menu_state.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show or edit the current week's meal plan.
    Plan {
        /// Schedule a recipe for a day.
        #[arg(long)]
        add: bool,

        /// Remove a planned meal.
        #[arg(long)]
        remove: bool,

        /// Change the serving count of a planned meal.
        #[arg(long)]
        servings: bool,

        /// Remove every planned meal this week.
        #[arg(long)]
        clear: bool,
    },

    /// Manage the ingredient catalog.
    Ingredients {
        /// Add an ingredient.
        #[arg(long)]
        add: bool,

        /// Remove an ingredient by name.
        #[arg(long)]
        remove: Option<String>,
    },

    /// Manage recipes.
    Recipes {
        /// Compose a new recipe from catalog ingredients.
        #[arg(long)]
        add: bool,

        /// Remove a recipe by title.
        #[arg(long)]
        remove: Option<String>,

        /// Show one recipe in full.
        #[arg(long)]
        show: Option<String>,
    },

    /// Build the shopping list from the current week's plan.
    List,

    /// Walk through the shopping list: check items off, add custom items.
    Shop,

    /// Export the shopping list to CSV.
    Export {
        /// Output path.
        #[arg(short, long, default_value = "shopping_list.csv")]
        output: String,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            add: false,
            remove: false,
            servings: false,
            clear: false,
        }
    }
}
