/// Number of recipe slots in a dispenser.
pub const NUM_RECIPES: usize = 3;

/// Units of each ingredient a new dispenser starts with.
pub const INITIAL_STOCK: u32 = 15;

/// Minimum Jaro-Winkler similarity for a typed name to match a recipe.
pub const FUZZY_MATCH_THRESHOLD: f64 = 0.7;
