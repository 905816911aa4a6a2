pub mod cli;
pub mod error;
pub mod interface;
pub mod maker;
pub mod models;
pub mod state;

pub use error::{CoffeeError, Result};
pub use maker::{CoffeeMaker, SharedCoffeeMaker};
pub use models::{DeclineReason, Ingredient, Ingredients, Inventory, Purchase, Recipe};
pub use state::RecipeBook;
