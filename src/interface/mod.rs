pub mod prompts;
pub mod render;

pub use prompts::{
    match_recipe, prompt_inventory, prompt_menu, prompt_payment, prompt_recipe,
    prompt_recipe_slot, prompt_yes_no, MenuChoice,
};
pub use render::{
    display_inventory, display_purchase, display_recipes, format_purchase, format_recipes,
};
