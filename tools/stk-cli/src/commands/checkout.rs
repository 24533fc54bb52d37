//! Checkout command.

use anyhow::{bail, Result};
use chrono::Utc;
use dialoguer::Confirm;
use serde_json::json;

use super::cart::{flush_notices, print_cart};
use super::CheckoutArgs;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    if shop.cart().is_empty() {
        bail!("Your cart is empty!");
    }

    // Confirmation
    if !args.yes && !ctx.output.is_json() {
        print_cart(&shop, ctx);

        let confirmed = Confirm::new()
            .with_prompt(format!("Check out for {}?", shop.cart().subtotal()))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.info("Checkout cancelled");
            return Ok(());
        }
    }

    let summary = shop.checkout();
    flush_notices(&mut shop, ctx);
    let summary = summary?;
    let completed_at = Utc::now();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "summary": summary,
            "completed_at": completed_at.to_rfc3339(),
        }));
        return Ok(());
    }

    ctx.output.header("Order placed");
    for line in summary.message().lines() {
        println!("  {}", line);
    }
    ctx.output
        .kv("Completed", &completed_at.format("%Y-%m-%d %H:%M:%S UTC").to_string());

    Ok(())
}
