use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoffeeError {
    #[error("Invalid quantity: '{value}' is not a non-negative integer")]
    InvalidQuantity { value: String },

    #[error("Invalid recipe: {reason}")]
    InvalidRecipe { reason: String },

    #[error("Recipe slot {index} is out of range (capacity {capacity})")]
    IndexOutOfRange { index: i64, capacity: usize },

    #[error("Invalid payment: {amount} is negative")]
    InvalidPayment { amount: i64 },

    #[error("Coffee maker state is poisoned")]
    StatePoisoned,

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, CoffeeError>;

impl CoffeeError {
    pub(crate) fn invalid_quantity(value: &str) -> Self {
        CoffeeError::InvalidQuantity {
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_recipe(reason: impl Into<String>) -> Self {
        CoffeeError::InvalidRecipe {
            reason: reason.into(),
        }
    }
}
