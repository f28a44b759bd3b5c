pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_amount, prompt_check_off, prompt_custom_item, prompt_optional_text, prompt_pick_day,
    prompt_pick_ingredient, prompt_pick_recipe, prompt_recipe_lines, prompt_select,
    prompt_servings, prompt_text, prompt_unit, prompt_yes_no,
};
pub use render::{
    WeekEntry, display_ingredients, display_recipe, display_recipes, display_shopping_list,
    display_skipped, display_week, shopping_item_label,
};
