/// Why a sale was declined. A decline is an ordinary outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclineReason {
    /// The selected slot holds no recipe.
    EmptySlot,

    /// The payment does not cover the recipe's price.
    InsufficientFunds { price: u32 },

    /// At least one ingredient is short.
    InsufficientIngredients,
}

/// Outcome of one purchase attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Purchase {
    /// A drink was made; ingredients were deducted.
    Dispensed { recipe: String, change: i64 },

    /// Nothing was made and the whole payment is handed back.
    Declined { reason: DeclineReason, refund: i64 },
}

impl Purchase {
    /// Money returned to the customer.
    pub fn change(&self) -> i64 {
        match self {
            Purchase::Dispensed { change, .. } => *change,
            Purchase::Declined { refund, .. } => *refund,
        }
    }

    pub fn is_dispensed(&self) -> bool {
        matches!(self, Purchase::Dispensed { .. })
    }
}
