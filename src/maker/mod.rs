pub mod coffee_maker;
pub mod constants;
pub mod shared;

pub use coffee_maker::CoffeeMaker;
pub use constants::*;
pub use shared::SharedCoffeeMaker;
