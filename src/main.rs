use std::path::Path;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use coffee_maker_rs::cli::{Cli, Command};
use coffee_maker_rs::error::{CoffeeError, Result};
use coffee_maker_rs::interface::{
    display_inventory, display_purchase, display_recipes, match_recipe, prompt_inventory,
    prompt_menu, prompt_payment, prompt_recipe, prompt_recipe_slot, prompt_yes_no, MenuChoice,
};
use coffee_maker_rs::maker::CoffeeMaker;
use coffee_maker_rs::state::load_recipes;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut maker = build_maker(cli.recipes.as_deref())?;

    match cli.command.unwrap_or_default() {
        Command::Menu => cmd_menu(&mut maker),
        Command::Brew { recipe, payment } => cmd_brew(&mut maker, &recipe, payment),
        Command::Recipes => cmd_recipes(&maker),
    }
}

/// A fresh dispenser, seeded from the recipe catalog if one was given.
fn build_maker(catalog: Option<&Path>) -> Result<CoffeeMaker> {
    let mut maker = CoffeeMaker::new();

    if let Some(path) = catalog {
        for recipe in load_recipes(path)? {
            let name = recipe.name().to_string();
            if !maker.add_recipe(recipe) {
                warn!(recipe = %name, "catalog recipe skipped (duplicate name or book full)");
            }
        }
    }

    Ok(maker)
}

/// Interactive dispenser menu.
fn cmd_menu(maker: &mut CoffeeMaker) -> Result<()> {
    loop {
        let choice = prompt_menu()?;
        if choice == MenuChoice::Exit {
            return Ok(());
        }

        match menu_action(maker, choice) {
            Ok(()) => {}
            // Bad input is reported and the menu carries on.
            Err(
                e @ (CoffeeError::InvalidQuantity { .. }
                | CoffeeError::InvalidRecipe { .. }
                | CoffeeError::InvalidPayment { .. }
                | CoffeeError::IndexOutOfRange { .. }
                | CoffeeError::InvalidInput(_)),
            ) => {
                println!("{}", e);
                println!();
            }
            Err(e) => return Err(e),
        }
    }
}

fn menu_action(maker: &mut CoffeeMaker, choice: MenuChoice) -> Result<()> {
    match choice {
        MenuChoice::AddRecipe => {
            let recipe = prompt_recipe()?;
            let name = recipe.name().to_string();
            if maker.add_recipe(recipe) {
                println!("{} successfully added.", name);
            } else {
                println!("{} could not be added.", name);
            }
        }
        MenuChoice::DeleteRecipe => {
            let Some(index) =
                prompt_recipe_slot(maker.recipe_book(), "Which recipe to delete?", true)?
            else {
                return Ok(());
            };
            if !prompt_yes_no("Delete this recipe?", false)? {
                return Ok(());
            }
            match maker.delete_recipe(index)? {
                Some(name) => println!("{} successfully deleted.", name),
                None => println!("Selected recipe doesn't exist and could not be deleted."),
            }
        }
        MenuChoice::EditRecipe => {
            let Some(index) =
                prompt_recipe_slot(maker.recipe_book(), "Which recipe to edit?", false)?
            else {
                return Ok(());
            };
            let recipe = prompt_recipe()?;
            let name = recipe.name().to_string();
            match maker.edit_recipe(index, recipe)? {
                Some(previous) => println!("{} successfully replaced by {}.", previous, name),
                None => println!("{} stored in slot {}.", name, index + 1),
            }
        }
        MenuChoice::AddInventory => {
            let [coffee, milk, sugar, chocolate] = prompt_inventory()?;
            maker.add_inventory(&coffee, &milk, &sugar, &chocolate)?;
            println!("Inventory successfully added.");
        }
        MenuChoice::CheckInventory => display_inventory(&maker.check_inventory()),
        MenuChoice::MakeCoffee => {
            let Some(index) =
                prompt_recipe_slot(maker.recipe_book(), "Which drink?", true)?
            else {
                return Ok(());
            };
            let payment = prompt_payment()?;
            let outcome = maker.purchase(index, payment)?;
            display_purchase(&outcome);
        }
        MenuChoice::Exit => {}
    }

    Ok(())
}

/// Buy one drink by name.
fn cmd_brew(maker: &mut CoffeeMaker, recipe: &str, payment: i64) -> Result<()> {
    let index = match_recipe(maker.recipe_book(), recipe)
        .ok_or_else(|| CoffeeError::RecipeNotFound(recipe.to_string()))?;

    let outcome = maker.purchase(index, payment)?;
    display_purchase(&outcome);
    display_inventory(&maker.check_inventory());
    Ok(())
}

/// Show the recipe book and inventory.
fn cmd_recipes(maker: &CoffeeMaker) -> Result<()> {
    display_recipes(maker.get_recipes());
    display_inventory(&maker.check_inventory());
    Ok(())
}
