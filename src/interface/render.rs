use crate::models::purchase::{DeclineReason, Purchase};
use crate::models::Recipe;

/// Format the recipe slots as a numbered list.
pub fn format_recipes(slots: &[Option<Recipe>]) -> String {
    let mut out = String::new();
    for (i, slot) in slots.iter().enumerate() {
        match slot {
            Some(recipe) => {
                out.push_str(&format!("{}. {} ({})\n", i + 1, recipe.name(), recipe.cost()))
            }
            None => out.push_str(&format!("{}. (empty)\n", i + 1)),
        }
    }
    out
}

/// Display the recipe slots.
pub fn display_recipes(slots: &[Option<Recipe>]) {
    println!();
    println!("=== Recipes ===");
    print!("{}", format_recipes(slots));
    println!();
}

/// Display the inventory report as-is.
pub fn display_inventory(report: &str) {
    println!();
    println!("=== Inventory ===");
    print!("{}", report);
    println!();
}

/// Customer-facing message for a purchase outcome.
pub fn format_purchase(purchase: &Purchase) -> String {
    match purchase {
        Purchase::Dispensed { recipe, change } => {
            format!("Thank you for purchasing {}\nYour change is: {}", recipe, change)
        }
        Purchase::Declined { reason, refund } => {
            let why = match reason {
                DeclineReason::EmptySlot => "There is no recipe in that slot.".to_string(),
                DeclineReason::InsufficientFunds { price } => {
                    format!("Insufficient funds: the price is {}.", price)
                }
                DeclineReason::InsufficientIngredients => {
                    "Not enough inventory to make this drink.".to_string()
                }
            };
            format!("{}\nYour money is returned: {}", why, refund)
        }
    }
}

/// Display a purchase outcome.
pub fn display_purchase(purchase: &Purchase) {
    println!();
    println!("{}", format_purchase(purchase));
    println!();
}
