use std::fmt;

use serde::{Deserialize, Serialize};

/// The four ingredients a dispenser stocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ingredient {
    Coffee,
    Milk,
    Sugar,
    Chocolate,
}

impl Ingredient {
    /// All ingredients, in inventory report order.
    pub const ALL: [Ingredient; 4] = [
        Ingredient::Coffee,
        Ingredient::Milk,
        Ingredient::Sugar,
        Ingredient::Chocolate,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Ingredient::Coffee => "Coffee",
            Ingredient::Milk => "Milk",
            Ingredient::Sugar => "Sugar",
            Ingredient::Chocolate => "Chocolate",
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of four ingredient amounts.
///
/// Used both for what a recipe requires and for what the inventory holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredients {
    #[serde(default)]
    pub coffee: u32,

    #[serde(default)]
    pub milk: u32,

    #[serde(default)]
    pub sugar: u32,

    #[serde(default)]
    pub chocolate: u32,
}

impl Ingredients {
    pub const fn new(coffee: u32, milk: u32, sugar: u32, chocolate: u32) -> Self {
        Self {
            coffee,
            milk,
            sugar,
            chocolate,
        }
    }

    /// Same amount of every ingredient.
    pub const fn uniform(amount: u32) -> Self {
        Self::new(amount, amount, amount, amount)
    }

    pub fn get(&self, ingredient: Ingredient) -> u32 {
        match ingredient {
            Ingredient::Coffee => self.coffee,
            Ingredient::Milk => self.milk,
            Ingredient::Sugar => self.sugar,
            Ingredient::Chocolate => self.chocolate,
        }
    }

    pub fn set(&mut self, ingredient: Ingredient, amount: u32) {
        match ingredient {
            Ingredient::Coffee => self.coffee = amount,
            Ingredient::Milk => self.milk = amount,
            Ingredient::Sugar => self.sugar = amount,
            Ingredient::Chocolate => self.chocolate = amount,
        }
    }

    /// True iff every amount is at most the corresponding amount in `stock`.
    pub fn fits_within(&self, stock: &Ingredients) -> bool {
        Ingredient::ALL
            .iter()
            .all(|&i| self.get(i) <= stock.get(i))
    }

    /// Add every amount; `None` if any counter would overflow.
    pub fn checked_add(&self, other: &Ingredients) -> Option<Ingredients> {
        Some(Ingredients {
            coffee: self.coffee.checked_add(other.coffee)?,
            milk: self.milk.checked_add(other.milk)?,
            sugar: self.sugar.checked_add(other.sugar)?,
            chocolate: self.chocolate.checked_add(other.chocolate)?,
        })
    }

    /// Subtract every amount; `None` if any counter would go negative.
    pub fn checked_sub(&self, other: &Ingredients) -> Option<Ingredients> {
        Some(Ingredients {
            coffee: self.coffee.checked_sub(other.coffee)?,
            milk: self.milk.checked_sub(other.milk)?,
            sugar: self.sugar.checked_sub(other.sugar)?,
            chocolate: self.chocolate.checked_sub(other.chocolate)?,
        })
    }
}
