use proptest::prelude::*;

use coffee_maker_rs::models::parse_quantity;
use coffee_maker_rs::{CoffeeMaker, Ingredient, Recipe};

fn recipe_strategy() -> impl Strategy<Value = Recipe> {
    (
        "[A-Za-z][A-Za-z ]{0,15}",
        0u32..30,
        0u32..30,
        0u32..30,
        0u32..30,
        0u32..200,
    )
        .prop_map(|(name, coffee, milk, sugar, chocolate, price)| {
            Recipe::from_text(
                &name,
                &coffee.to_string(),
                &milk.to_string(),
                &sugar.to_string(),
                &chocolate.to_string(),
                &price.to_string(),
            )
            .unwrap()
        })
}

proptest! {
    #[test]
    fn first_add_lands_in_slot_zero(recipe in recipe_strategy()) {
        let mut maker = CoffeeMaker::new();
        prop_assert!(maker.add_recipe(recipe.clone()));
        prop_assert_eq!(&maker.get_recipes()[0], &Some(recipe));
        prop_assert!(maker.get_recipes()[1].is_none());
    }

    #[test]
    fn negative_quantities_never_parse(value in i64::MIN..0) {
        prop_assert!(parse_quantity(&value.to_string()).is_err());
    }

    #[test]
    fn non_negative_quantities_parse(value in 0u32..=u32::MAX) {
        prop_assert_eq!(parse_quantity(&value.to_string()).unwrap(), value);
    }

    #[test]
    fn purchase_conserves_money_and_stock(recipe in recipe_strategy(), payment in 0i64..300) {
        let mut maker = CoffeeMaker::new();
        maker.add_recipe(recipe.clone());

        let before = maker.inventory().clone();
        let change = maker.make_coffee(0, payment).unwrap();
        let after = maker.inventory();

        let affordable = payment >= i64::from(recipe.cost());
        let in_stock = before.has_sufficient_ingredients(&recipe);

        if affordable && in_stock {
            prop_assert_eq!(change, payment - i64::from(recipe.cost()));
            for ingredient in Ingredient::ALL {
                prop_assert_eq!(
                    after.stock(ingredient),
                    before.stock(ingredient) - recipe.amount(ingredient)
                );
            }
        } else {
            prop_assert_eq!(change, payment);
            prop_assert_eq!(after, &before);
        }
    }

    #[test]
    fn restock_with_any_bad_field_changes_nothing(
        good in 0u32..100,
        bad in "-[1-9][0-9]{0,3}|[a-z]{1,6}",
        position in 0usize..4,
    ) {
        let mut fields = [good.to_string(), good.to_string(), good.to_string(), good.to_string()];
        fields[position] = bad;

        let mut maker = CoffeeMaker::new();
        let before = maker.check_inventory();
        prop_assert!(maker.add_inventory(&fields[0], &fields[1], &fields[2], &fields[3]).is_err());
        prop_assert_eq!(maker.check_inventory(), before);
    }
}
