mod persistence;
mod recipe_book;

pub use persistence::load_recipes;
pub use recipe_book::{slot_index, RecipeBook};
