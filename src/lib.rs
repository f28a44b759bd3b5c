pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod shopping;
pub mod state;

pub use error::{Result, UkemenyError};
pub use models::{Ingredient, PlannedMeal, Recipe, RecipeIngredient, ShoppingItem};
