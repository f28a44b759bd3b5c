mod manager;
mod persistence;

pub use manager::{CUSTOM_ITEM_CATEGORY, MenuState, MenuStateManager};
pub use persistence::{load_state, save_state};
