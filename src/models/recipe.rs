use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoffeeError, Result};
use crate::models::ingredients::{Ingredient, Ingredients};
use crate::models::quantity::parse_quantity;

/// A purchasable drink: a name, a price, and four ingredient amounts.
///
/// Starts out empty (no name, everything zero) and is filled in one field at a
/// time through validating setters. A failed setter leaves its field as it was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recipe {
    name: String,

    #[serde(default)]
    price: u32,

    #[serde(flatten)]
    amounts: Ingredients,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a recipe from text fields, running every setter.
    pub fn from_text(
        name: &str,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
        price: &str,
    ) -> Result<Self> {
        let mut recipe = Recipe::new();
        recipe.set_name(name)?;
        recipe.set_amt_coffee(coffee)?;
        recipe.set_amt_milk(milk)?;
        recipe.set_amt_sugar(sugar)?;
        recipe.set_amt_chocolate(chocolate)?;
        recipe.set_price(price)?;
        Ok(recipe)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }

    /// Cost of one serving; same as the price.
    pub fn cost(&self) -> u32 {
        self.price
    }

    pub fn amount(&self, ingredient: Ingredient) -> u32 {
        self.amounts.get(ingredient)
    }

    pub fn amounts(&self) -> &Ingredients {
        &self.amounts
    }

    /// A recipe may be registered only once it has a name.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn set_name(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(CoffeeError::invalid_recipe("name must not be empty"));
        }
        self.name = name.to_string();
        Ok(())
    }

    pub fn set_price(&mut self, price: &str) -> Result<()> {
        self.price = parse_quantity(price).map_err(|_| {
            CoffeeError::invalid_recipe("price must be a non-negative integer")
        })?;
        Ok(())
    }

    pub fn set_amount(&mut self, ingredient: Ingredient, amount: &str) -> Result<()> {
        let amount = parse_quantity(amount).map_err(|_| {
            CoffeeError::invalid_recipe(format!(
                "units of {} must be a non-negative integer",
                ingredient.name().to_lowercase()
            ))
        })?;
        self.amounts.set(ingredient, amount);
        Ok(())
    }

    pub fn set_amt_coffee(&mut self, amount: &str) -> Result<()> {
        self.set_amount(Ingredient::Coffee, amount)
    }

    pub fn set_amt_milk(&mut self, amount: &str) -> Result<()> {
        self.set_amount(Ingredient::Milk, amount)
    }

    pub fn set_amt_sugar(&mut self, amount: &str) -> Result<()> {
        self.set_amount(Ingredient::Sugar, amount)
    }

    pub fn set_amt_chocolate(&mut self, amount: &str) -> Result<()> {
        self.set_amount(Ingredient::Chocolate, amount)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
