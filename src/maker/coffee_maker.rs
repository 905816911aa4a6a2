use tracing::{debug, info};

use crate::error::{CoffeeError, Result};
use crate::maker::constants::NUM_RECIPES;
use crate::models::purchase::{DeclineReason, Purchase};
use crate::models::{Inventory, Recipe};
use crate::state::RecipeBook;

/// A dispenser: a recipe book plus the inventory its purchases draw on.
#[derive(Debug, Clone, Default)]
pub struct CoffeeMaker {
    recipe_book: RecipeBook,
    inventory: Inventory,
}

impl CoffeeMaker {
    /// An empty recipe book and a freshly stocked inventory.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parts(recipe_book: RecipeBook, inventory: Inventory) -> Self {
        Self {
            recipe_book,
            inventory,
        }
    }

    pub fn recipe_book(&self) -> &RecipeBook {
        &self.recipe_book
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn add_recipe(&mut self, recipe: Recipe) -> bool {
        self.recipe_book.add(recipe)
    }

    pub fn delete_recipe(&mut self, index: usize) -> Result<Option<String>> {
        self.recipe_book.delete(index)
    }

    pub fn edit_recipe(&mut self, index: usize, recipe: Recipe) -> Result<Option<String>> {
        self.recipe_book.edit(index, recipe)
    }

    pub fn get_recipes(&self) -> &[Option<Recipe>; NUM_RECIPES] {
        self.recipe_book.list()
    }

    pub fn add_inventory(
        &mut self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<()> {
        self.inventory.restock(coffee, milk, sugar, chocolate)
    }

    pub fn check_inventory(&self) -> String {
        self.inventory.describe()
    }

    /// Sell one drink, returning the change.
    ///
    /// Declined sales (empty slot, short payment, missing ingredients) hand
    /// back the whole payment. Only malformed input is an error.
    pub fn make_coffee(&mut self, index: usize, payment: i64) -> Result<i64> {
        self.purchase(index, payment).map(|p| p.change())
    }

    /// Run one purchase transaction.
    ///
    /// Checked in order: payment sign, slot index, empty slot, funds, stock.
    /// Inventory changes only when every check passes.
    pub fn purchase(&mut self, index: usize, payment: i64) -> Result<Purchase> {
        if payment < 0 {
            return Err(CoffeeError::InvalidPayment { amount: payment });
        }

        let Some(recipe) = self.recipe_book.get(index)? else {
            debug!(slot = index, "no recipe in slot");
            return Ok(Purchase::Declined {
                reason: DeclineReason::EmptySlot,
                refund: payment,
            });
        };

        let price = recipe.cost();
        if payment < i64::from(price) {
            debug!(recipe = recipe.name(), price, payment, "insufficient funds");
            return Ok(Purchase::Declined {
                reason: DeclineReason::InsufficientFunds { price },
                refund: payment,
            });
        }

        if !self.inventory.has_sufficient_ingredients(recipe)
            || !self.inventory.use_ingredients(recipe)
        {
            debug!(recipe = recipe.name(), "insufficient ingredients");
            return Ok(Purchase::Declined {
                reason: DeclineReason::InsufficientIngredients,
                refund: payment,
            });
        }

        let change = payment - i64::from(price);
        info!(recipe = recipe.name(), payment, change, "drink dispensed");
        Ok(Purchase::Dispensed {
            recipe: recipe.name().to_string(),
            change,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredients;

    fn maker_with_coffee() -> CoffeeMaker {
        let mut maker = CoffeeMaker::new();
        let recipe = Recipe::from_text("Coffee", "3", "1", "1", "0", "50").unwrap();
        assert!(maker.add_recipe(recipe));
        maker
    }

    #[test]
    fn test_purchase_dispensed() {
        let mut maker = maker_with_coffee();
        let outcome = maker.purchase(0, 75).unwrap();
        assert_eq!(
            outcome,
            Purchase::Dispensed {
                recipe: "Coffee".to_string(),
                change: 25
            }
        );
    }

    #[test]
    fn test_exact_payment_gives_no_change() {
        let mut maker = maker_with_coffee();
        assert_eq!(maker.make_coffee(0, 50).unwrap(), 0);
        assert_eq!(maker.inventory().coffee(), 12);
    }

    #[test]
    fn test_decline_reasons() {
        let mut maker = maker_with_coffee();

        assert_eq!(
            maker.purchase(1, 40).unwrap(),
            Purchase::Declined {
                reason: DeclineReason::EmptySlot,
                refund: 40
            }
        );
        assert_eq!(
            maker.purchase(0, 40).unwrap(),
            Purchase::Declined {
                reason: DeclineReason::InsufficientFunds { price: 50 },
                refund: 40
            }
        );

        let mut short = CoffeeMaker::with_parts(
            maker.recipe_book().clone(),
            Inventory::with_stock(Ingredients::new(2, 15, 15, 15)),
        );
        assert_eq!(
            short.purchase(0, 60).unwrap(),
            Purchase::Declined {
                reason: DeclineReason::InsufficientIngredients,
                refund: 60
            }
        );
        assert_eq!(short.inventory().coffee(), 2);
    }

    #[test]
    fn test_payment_checked_before_index() {
        let mut maker = CoffeeMaker::new();
        assert!(matches!(
            maker.purchase(7, -1),
            Err(CoffeeError::InvalidPayment { amount: -1 })
        ));
        assert!(matches!(
            maker.purchase(7, 10),
            Err(CoffeeError::IndexOutOfRange { index: 7, .. })
        ));
    }

    #[test]
    fn test_funds_checked_before_stock() {
        let mut maker = CoffeeMaker::with_parts(
            maker_with_coffee().recipe_book().clone(),
            Inventory::with_stock(Ingredients::default()),
        );
        assert_eq!(
            maker.purchase(0, 10).unwrap(),
            Purchase::Declined {
                reason: DeclineReason::InsufficientFunds { price: 50 },
                refund: 10
            }
        );
    }
}
