use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{CoffeeError, Result};
use crate::maker::coffee_maker::CoffeeMaker;
use crate::models::Recipe;
use crate::models::purchase::Purchase;

/// A dispenser shared between threads.
///
/// Every operation holds the lock for its whole duration, so a purchase's
/// stock check and deduction cannot interleave with another purchase.
#[derive(Debug, Clone, Default)]
pub struct SharedCoffeeMaker {
    inner: Arc<Mutex<CoffeeMaker>>,
}

impl SharedCoffeeMaker {
    pub fn new(maker: CoffeeMaker) -> Self {
        Self {
            inner: Arc::new(Mutex::new(maker)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, CoffeeMaker>> {
        self.inner.lock().map_err(|_| CoffeeError::StatePoisoned)
    }

    /// Run a closure with exclusive access to the dispenser.
    pub fn with<T>(&self, f: impl FnOnce(&mut CoffeeMaker) -> T) -> Result<T> {
        let mut maker = self.lock()?;
        Ok(f(&mut maker))
    }

    pub fn add_recipe(&self, recipe: Recipe) -> Result<bool> {
        Ok(self.lock()?.add_recipe(recipe))
    }

    pub fn delete_recipe(&self, index: usize) -> Result<Option<String>> {
        self.lock()?.delete_recipe(index)
    }

    pub fn edit_recipe(&self, index: usize, recipe: Recipe) -> Result<Option<String>> {
        self.lock()?.edit_recipe(index, recipe)
    }

    /// Snapshot of the recipe slots.
    pub fn get_recipes(&self) -> Result<Vec<Option<Recipe>>> {
        Ok(self.lock()?.get_recipes().to_vec())
    }

    pub fn add_inventory(
        &self,
        coffee: &str,
        milk: &str,
        sugar: &str,
        chocolate: &str,
    ) -> Result<()> {
        self.lock()?.add_inventory(coffee, milk, sugar, chocolate)
    }

    pub fn check_inventory(&self) -> Result<String> {
        Ok(self.lock()?.check_inventory())
    }

    pub fn make_coffee(&self, index: usize, payment: i64) -> Result<i64> {
        self.lock()?.make_coffee(index, payment)
    }

    pub fn purchase(&self, index: usize, payment: i64) -> Result<Purchase> {
        self.lock()?.purchase(index, payment)
    }
}
