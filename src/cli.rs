use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// CoffeeMaker — a self-service coffee dispenser with a three-slot recipe book.
#[derive(Parser, Debug)]
#[command(name = "coffee_maker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// JSON recipe catalog to pre-load into the recipe book.
    #[arg(short, long, global = true)]
    pub recipes: Option<PathBuf>,

    /// Log debug events to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Run the interactive dispenser menu.
    #[default]
    Menu,

    /// Buy one drink by name and print the change.
    Brew {
        /// Recipe name (close misspellings are accepted).
        #[arg(long)]
        recipe: String,

        /// Amount paid.
        #[arg(long, allow_negative_numbers = true)]
        payment: i64,
    },

    /// Show the recipe book and the inventory.
    Recipes,
}
