use std::fs;
use std::path::Path;

use crate::error::{CoffeeError, Result};
use crate::models::Recipe;

/// Load a recipe catalog from a JSON file.
///
/// The file holds an array of recipes. Every entry must have a name; order is
/// preserved so the catalog decides which recipe lands in which slot.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;

    if let Some(position) = recipes.iter().position(|r| !r.is_valid()) {
        return Err(CoffeeError::invalid_recipe(format!(
            "catalog entry {} has no name",
            position + 1
        )));
    }

    Ok(recipes)
}
