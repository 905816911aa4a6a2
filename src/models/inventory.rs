use std::fmt;

use tracing::{debug, info};

use crate::error::{CoffeeError, Result};
use crate::maker::constants::INITIAL_STOCK;
use crate::models::ingredients::{Ingredient, Ingredients};
use crate::models::quantity::parse_quantity;
use crate::models::recipe::Recipe;

/// Stock levels of the four ingredients.
///
/// Counters never go negative: restocking only adds, and a purchase only
/// deducts after sufficiency has been confirmed for all four at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    stock: Ingredients,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            stock: Ingredients::uniform(INITIAL_STOCK),
        }
    }
}

impl Inventory {
    /// A fresh inventory holding `INITIAL_STOCK` of every ingredient.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(stock: Ingredients) -> Self {
        Self { stock }
    }

    pub fn stock(&self, ingredient: Ingredient) -> u32 {
        self.stock.get(ingredient)
    }

    pub fn levels(&self) -> &Ingredients {
        &self.stock
    }

    pub fn coffee(&self) -> u32 {
        self.stock.coffee
    }

    pub fn milk(&self) -> u32 {
        self.stock.milk
    }

    pub fn sugar(&self) -> u32 {
        self.stock.sugar
    }

    pub fn chocolate(&self) -> u32 {
        self.stock.chocolate
    }

    /// Add units of every ingredient from text fields.
    ///
    /// All four fields are parsed before anything changes: if any of them is
    /// not a non-negative integer (or the sum would overflow a counter) the
    /// call fails with `InvalidQuantity` and no counter moves.
    pub fn restock(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<()> {
        let added = Ingredients::new(
            parse_quantity(coffee)?,
            parse_quantity(milk)?,
            parse_quantity(sugar)?,
            parse_quantity(chocolate)?,
        );
        self.add(&added)
    }

    /// Typed counterpart of [`Inventory::restock`].
    pub fn add(&mut self, added: &Ingredients) -> Result<()> {
        let updated = self.stock.checked_add(added).ok_or_else(|| {
            let overflowing = Ingredient::ALL
                .into_iter()
                .find(|&i| self.stock.get(i).checked_add(added.get(i)).is_none())
                .unwrap_or(Ingredient::Coffee);
            CoffeeError::InvalidQuantity {
                value: added.get(overflowing).to_string(),
            }
        })?;

        self.stock = updated;
        info!(
            coffee = self.stock.coffee,
            milk = self.stock.milk,
            sugar = self.stock.sugar,
            chocolate = self.stock.chocolate,
            "inventory restocked"
        );
        Ok(())
    }

    /// True iff every amount the recipe needs is in stock.
    pub fn has_sufficient_ingredients(&self, recipe: &Recipe) -> bool {
        recipe.amounts().fits_within(&self.stock)
    }

    /// Deduct one serving of `recipe`.
    ///
    /// Callers confirm sufficiency first. If they did not, nothing is deducted
    /// and `false` is returned.
    pub fn use_ingredients(&mut self, recipe: &Recipe) -> bool {
        match self.stock.checked_sub(recipe.amounts()) {
            Some(remaining) => {
                self.stock = remaining;
                true
            }
            None => {
                debug!(recipe = recipe.name(), "not enough ingredients to deduct");
                false
            }
        }
    }

    /// The inventory report, one `<Name>: <count>` line per ingredient.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ingredient in Ingredient::ALL {
            writeln!(f, "{}: {}", ingredient.name(), self.stock.get(ingredient))?;
        }
        Ok(())
    }
}
