//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod list;
pub mod product;

use clap::{Args, Subcommand};
use stk_commerce::search::RatingThreshold;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Category tab (all, weapons, money, watches, scripts).
    #[arg(long)]
    pub category: Option<String>,

    /// Subcategory within the category.
    #[arg(long)]
    pub subcategory: Option<String>,

    /// Price slider ceiling, in dollars.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Lower price bound, in dollars.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Brands to include (repeatable).
    #[arg(long)]
    pub brand: Vec<String>,

    /// Minimum star rating, e.g. 5, 4 or 3.5 (repeatable).
    #[arg(long)]
    pub rating: Vec<RatingThreshold>,

    /// Search term.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Sort order (featured, price-low, price-high, name, newest, rating).
    #[arg(long)]
    pub sort: Option<String>,

    /// Page to show.
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Page URL query string, e.g. "?category=money".
    #[arg(long)]
    pub query: Option<String>,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: u32,
}

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Text typed into the search box.
    pub query: String,

    /// Search for the first suggestion, as if it were clicked.
    #[arg(long)]
    pub select: bool,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show cart contents and totals.
    Show,
    /// Add one unit of a product.
    Add {
        /// Product id.
        id: u32,
        /// Option for products that need one (weapons).
        #[arg(long)]
        variant: Option<String>,
    },
    /// Remove a line.
    Remove {
        /// Product id.
        id: u32,
        /// Option of the line to remove.
        #[arg(long)]
        variant: Option<String>,
    },
    /// Change a line's quantity by a delta.
    Qty {
        /// Product id.
        id: u32,
        /// Amount to add; negative to take away.
        #[arg(allow_hyphen_values = true)]
        delta: i64,
        /// Option of the line to change.
        #[arg(long)]
        variant: Option<String>,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// File to create; a .json name writes JSON.
        #[arg(default_value = "stk.toml")]
        path: String,
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
