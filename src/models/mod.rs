pub mod ingredient;
pub mod plan;
pub mod recipe;

pub use ingredient::Ingredient;
pub use plan::{PlannedMeal, ShoppingItem, week_of};
pub use recipe::{Recipe, RecipeIngredient};
