//! STK CLI - Command line storefront for the STK Supply catalog.
//!
//! Commands:
//! - `stk list` - Browse the catalog with filters, sorting and pages
//! - `stk show` - Quick view of one product
//! - `stk suggest` - Search-as-you-type suggestions
//! - `stk cart` - Inspect and edit the cart
//! - `stk checkout` - Check out the cart
//! - `stk categories` - Product counts per category
//! - `stk config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{CartArgs, CheckoutArgs, ConfigArgs, ListArgs, ShowArgs, SuggestArgs};

/// STK CLI - Browse the STK Supply catalog and manage your cart
#[derive(Parser)]
#[command(name = "stk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory the cart is stored in
    #[arg(long, global = true)]
    store: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    List(ListArgs),

    /// Show a single product
    Show(ShowArgs),

    /// Suggest products for a search term
    Suggest(SuggestArgs),

    /// Manage the cart
    Cart(CartArgs),

    /// Check out the cart
    Checkout(CheckoutArgs),

    /// Show product counts per category
    Categories,

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.store.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx),
        Commands::Show(args) => commands::product::show(args, &ctx),
        Commands::Suggest(args) => commands::product::suggest(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Categories => commands::list::categories(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
