use dialoguer::{Confirm, Input, Select};
use strsim::jaro_winkler;

use crate::error::{CoffeeError, Result};
use crate::maker::constants::FUZZY_MATCH_THRESHOLD;
use crate::models::{Ingredient, Recipe};
use crate::state::RecipeBook;

/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddRecipe,
    DeleteRecipe,
    EditRecipe,
    AddInventory,
    CheckInventory,
    MakeCoffee,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 7] = [
        MenuChoice::AddRecipe,
        MenuChoice::DeleteRecipe,
        MenuChoice::EditRecipe,
        MenuChoice::AddInventory,
        MenuChoice::CheckInventory,
        MenuChoice::MakeCoffee,
        MenuChoice::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddRecipe => "Add a recipe",
            MenuChoice::DeleteRecipe => "Delete a recipe",
            MenuChoice::EditRecipe => "Edit a recipe",
            MenuChoice::AddInventory => "Add inventory",
            MenuChoice::CheckInventory => "Check inventory",
            MenuChoice::MakeCoffee => "Make coffee",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Show the main menu.
pub fn prompt_menu() -> Result<MenuChoice> {
    let labels: Vec<&str> = MenuChoice::ALL.iter().map(|c| c.label()).collect();

    let selection = Select::new()
        .with_prompt("What would you like to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(MenuChoice::ALL
        .get(selection)
        .copied()
        .unwrap_or(MenuChoice::Exit))
}

fn prompt_text(prompt: &str, default: &str) -> Result<String> {
    Ok(Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?)
}

/// Ask for every field of a new recipe.
///
/// Each answer goes through the recipe's own setter, so the first invalid
/// field aborts with `InvalidRecipe`.
pub fn prompt_recipe() -> Result<Recipe> {
    let mut recipe = Recipe::new();

    let name: String = Input::new()
        .with_prompt("Recipe name")
        .interact_text()?;
    recipe.set_name(name.trim())?;

    recipe.set_price(&prompt_text("Price", "0")?)?;
    for ingredient in Ingredient::ALL {
        let prompt = format!("Units of {}", ingredient.name().to_lowercase());
        let amount = prompt_text(&prompt, "0")?;
        recipe.set_amount(ingredient, &amount)?;
    }

    Ok(recipe)
}

/// Let the user pick one of the recipe slots.
///
/// With `occupied_only`, empty slots are not offered. Returns `None` when
/// there is nothing to pick or the user cancels.
pub fn prompt_recipe_slot(
    book: &RecipeBook,
    prompt: &str,
    occupied_only: bool,
) -> Result<Option<usize>> {
    let slots: Vec<(usize, String)> = book
        .list()
        .iter()
        .enumerate()
        .filter(|(_, slot)| !occupied_only || slot.is_some())
        .map(|(i, slot)| {
            let label = match slot {
                Some(recipe) => recipe.name().to_string(),
                None => "(empty)".to_string(),
            };
            (i, label)
        })
        .collect();

    if slots.is_empty() {
        println!("There are no recipes.");
        return Ok(None);
    }

    let mut items: Vec<String> = slots.iter().map(|(_, label)| label.clone()).collect();
    items.push("Cancel".to_string());

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(slots.get(selection).map(|(index, _)| *index))
}

/// Ask for units of each ingredient to add; answers are validated by the caller.
pub fn prompt_inventory() -> Result<[String; 4]> {
    Ok([
        prompt_text("Units of coffee to add", "0")?,
        prompt_text("Units of milk to add", "0")?,
        prompt_text("Units of sugar to add", "0")?,
        prompt_text("Units of chocolate to add", "0")?,
    ])
}

/// Ask how much the customer pays.
pub fn prompt_payment() -> Result<i64> {
    let input = prompt_text("Enter payment", "0")?;
    input
        .trim()
        .parse()
        .map_err(|_| CoffeeError::InvalidInput(format!("'{}' is not an amount", input)))
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Resolve a typed recipe name to a slot.
///
/// A case-insensitive exact match wins; otherwise the closest name scoring
/// above `FUZZY_MATCH_THRESHOLD` is taken.
pub fn match_recipe(book: &RecipeBook, input: &str) -> Option<usize> {
    let wanted = input.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    if let Some((index, _)) = book
        .occupied()
        .find(|(_, r)| r.name().to_lowercase() == wanted)
    {
        return Some(index);
    }

    book.occupied()
        .map(|(index, r)| (index, jaro_winkler(&r.name().to_lowercase(), &wanted)))
        .filter(|(_, score)| *score > FUZZY_MATCH_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> RecipeBook {
        let mut book = RecipeBook::new();
        book.add(Recipe::from_text("Coffee", "3", "1", "1", "0", "50").unwrap());
        book.add(Recipe::from_text("Mocha", "3", "1", "1", "20", "75").unwrap());
        book.add(Recipe::from_text("Latte", "3", "3", "1", "0", "100").unwrap());
        book
    }

    #[test]
    fn test_match_exact_case_insensitive() {
        let book = sample_book();
        assert_eq!(match_recipe(&book, "mocha"), Some(1));
        assert_eq!(match_recipe(&book, "LATTE"), Some(2));
    }

    #[test]
    fn test_match_fuzzy() {
        let book = sample_book();
        assert_eq!(match_recipe(&book, "coffe"), Some(0));
        assert_eq!(match_recipe(&book, "Lattee"), Some(2));
    }

    #[test]
    fn test_match_none() {
        let book = sample_book();
        assert_eq!(match_recipe(&book, "Hot Chocolate"), None);
        assert_eq!(match_recipe(&book, "   "), None);
        assert_eq!(match_recipe(&RecipeBook::new(), "Coffee"), None);
    }
}
