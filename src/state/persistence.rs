use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::state::MenuState;

/// Load application state from a JSON file.
///
/// A missing file loads the empty default, so first runs need no setup step.
pub fn load_state<P: AsRef<Path>>(path: P) -> Result<MenuState> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(MenuState::default());
    }

    let content = fs::read_to_string(path)?;
    let state: MenuState = serde_json::from_str(&content)?;
    Ok(state)
}

/// Save application state to a JSON file.
pub fn save_state<P: AsRef<Path>>(path: P, state: &MenuState) -> Result<()> {
    let json = serde_json::to_string_pretty(state)?;
    fs::write(path, json)?;
    Ok(())
}
