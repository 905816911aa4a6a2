pub mod ingredients;
pub mod inventory;
pub mod purchase;
pub mod quantity;
pub mod recipe;

pub use ingredients::{Ingredient, Ingredients};
pub use inventory::Inventory;
pub use purchase::{DeclineReason, Purchase};
pub use quantity::parse_quantity;
pub use recipe::Recipe;
