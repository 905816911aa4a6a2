use tracing::debug;

use crate::error::{CoffeeError, Result};
use crate::maker::constants::NUM_RECIPES;
use crate::models::Recipe;

/// Fixed-capacity, slot-addressed registry of recipes.
///
/// Occupied slots added through [`RecipeBook::add`] never share a name.
/// [`RecipeBook::edit`] replaces a slot wholesale and does not re-check names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeBook {
    slots: [Option<Recipe>; NUM_RECIPES],
}

/// Convert a raw caller-supplied index into a checked slot index.
pub fn slot_index(raw: i64) -> Result<usize> {
    usize::try_from(raw)
        .ok()
        .filter(|&index| index < NUM_RECIPES)
        .ok_or(CoffeeError::IndexOutOfRange {
            index: raw,
            capacity: NUM_RECIPES,
        })
}

fn check_index(index: usize) -> Result<usize> {
    if index < NUM_RECIPES {
        Ok(index)
    } else {
        Err(CoffeeError::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            capacity: NUM_RECIPES,
        })
    }
}

impl RecipeBook {
    /// An empty book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `recipe` in the first empty slot.
    ///
    /// Returns `false` without changing anything if the recipe has no name,
    /// if its name is already taken, or if every slot is occupied.
    pub fn add(&mut self, recipe: Recipe) -> bool {
        if !recipe.is_valid() {
            debug!("rejected recipe without a name");
            return false;
        }

        if self.find(recipe.name()).is_some() {
            debug!(recipe = recipe.name(), "rejected duplicate recipe name");
            return false;
        }

        match self.slots.iter().position(|slot| slot.is_none()) {
            Some(index) => {
                debug!(recipe = recipe.name(), slot = index, "recipe added");
                self.slots[index] = Some(recipe);
                true
            }
            None => {
                debug!(recipe = recipe.name(), "recipe book is full");
                false
            }
        }
    }

    /// Clear a slot, returning the name of the recipe it held.
    ///
    /// Clearing an already empty slot is not an error and returns `None`.
    pub fn delete(&mut self, index: usize) -> Result<Option<String>> {
        let index = check_index(index)?;
        let removed = self.slots[index].take().map(|r| r.name().to_string());
        debug!(slot = index, removed = ?removed, "recipe slot cleared");
        Ok(removed)
    }

    /// Replace the slot's content, occupied or not, returning the old name.
    pub fn edit(&mut self, index: usize, recipe: Recipe) -> Result<Option<String>> {
        let index = check_index(index)?;
        debug!(slot = index, recipe = recipe.name(), "recipe slot replaced");
        let previous = self.slots[index].replace(recipe);
        Ok(previous.map(|r| r.name().to_string()))
    }

    pub fn get(&self, index: usize) -> Result<Option<&Recipe>> {
        let index = check_index(index)?;
        Ok(self.slots[index].as_ref())
    }

    /// Every slot in order; `None` marks an empty one.
    pub fn list(&self) -> &[Option<Recipe>; NUM_RECIPES] {
        &self.slots
    }

    /// Slot holding a recipe with exactly this name.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|r| r.name() == name))
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == NUM_RECIPES
    }

    /// Occupied slots with their indices.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Recipe)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|r| (i, r)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(name: &str) -> Recipe {
        Recipe::from_text(name, "3", "1", "1", "0", "50").unwrap()
    }

    #[test]
    fn test_add_fills_first_free_slot() {
        let mut book = RecipeBook::new();
        assert!(book.add(recipe("Coffee")));
        assert!(book.add(recipe("Mocha")));
        book.delete(0).unwrap();

        assert!(book.add(recipe("Latte")));
        assert_eq!(book.list()[0].as_ref().unwrap().name(), "Latte");
        assert_eq!(book.list()[1].as_ref().unwrap().name(), "Mocha");
    }

    #[test]
    fn test_add_rejects_duplicates_and_overflow() {
        let mut book = RecipeBook::new();
        assert!(book.add(recipe("Coffee")));
        assert!(!book.add(recipe("Coffee")));
        assert!(book.add(recipe("Mocha")));
        assert!(book.add(recipe("Latte")));
        assert!(book.is_full());

        let before = book.clone();
        assert!(!book.add(recipe("Hot Chocolate")));
        assert_eq!(book, before);
    }

    #[test]
    fn test_add_rejects_unnamed_recipe() {
        let mut book = RecipeBook::new();
        assert!(!book.add(Recipe::new()));
        assert!(book.is_empty());
    }

    #[test]
    fn test_delete() {
        let mut book = RecipeBook::new();
        book.add(recipe("Coffee"));

        assert_eq!(book.delete(0).unwrap(), Some("Coffee".to_string()));
        assert_eq!(book.delete(0).unwrap(), None);
        assert!(book.list()[0].is_none());
        assert!(matches!(
            book.delete(3),
            Err(CoffeeError::IndexOutOfRange { index: 3, capacity: 3 })
        ));
    }

    #[test]
    fn test_edit_fills_empty_slot() {
        let mut book = RecipeBook::new();
        assert_eq!(book.edit(2, recipe("Mocha")).unwrap(), None);
        assert_eq!(book.get(2).unwrap().unwrap().name(), "Mocha");
        assert!(book.edit(5, recipe("Mocha")).is_err());
    }

    #[test]
    fn test_edit_does_not_check_names() {
        let mut book = RecipeBook::new();
        book.add(recipe("Coffee"));
        book.add(recipe("Mocha"));

        assert_eq!(
            book.edit(1, recipe("Coffee")).unwrap(),
            Some("Mocha".to_string())
        );
        assert_eq!(book.list()[0], book.list()[1]);
    }

    #[test]
    fn test_slot_index() {
        assert_eq!(slot_index(0).unwrap(), 0);
        assert_eq!(slot_index(2).unwrap(), 2);
        assert!(matches!(
            slot_index(-1),
            Err(CoffeeError::IndexOutOfRange { index: -1, .. })
        ));
        assert!(slot_index(3).is_err());
    }
}
