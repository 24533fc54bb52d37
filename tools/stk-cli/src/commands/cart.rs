//! Cart commands.

use anyhow::Result;
use serde_json::json;
use stk_cache::KvStore;
use stk_commerce::cart::QuantityChange;
use stk_commerce::notice::NoticeLevel;
use stk_commerce::{LineKey, ProductId, Shop, VariantTag};

use super::{CartArgs, CartCommand};
use crate::context::Context;

const WIDTHS: [usize; 5] = [28, 10, 4, 8, 9];

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add { id, variant } => {
            let quantity = shop.add_to_cart(ProductId::new(id), variant.as_deref());
            flush_notices(&mut shop, ctx);
            let quantity = quantity?;
            ctx.output.debug(&format!("Line quantity is now {}", quantity));
        }
        CartCommand::Remove { id, variant } => {
            let key = line_key(id, variant.as_deref());
            if shop.remove_from_cart(&key) {
                ctx.output.success(&format!("Removed {}", key));
            } else {
                ctx.output.warn(&format!("No cart line for {}", key));
            }
        }
        CartCommand::Qty { id, delta, variant } => {
            let key = line_key(id, variant.as_deref());
            match shop.update_quantity(&key, delta) {
                QuantityChange::Updated(quantity) => {
                    ctx.output.success(&format!("{} now has quantity {}", key, quantity))
                }
                QuantityChange::Removed => ctx.output.success(&format!("Removed {}", key)),
                QuantityChange::Missing => ctx.output.warn(&format!("No cart line for {}", key)),
            }
        }
        CartCommand::Clear => {
            shop.clear_cart();
            ctx.output.success("Cart cleared");
        }
    }

    print_cart(&shop, ctx);
    Ok(())
}

fn line_key(id: u32, variant: Option<&str>) -> LineKey {
    LineKey::new(ProductId::new(id), VariantTag::parse(variant))
}

/// Print queued notices. Errors are left to the caller's error report.
pub fn flush_notices<S: KvStore>(shop: &mut Shop<S>, ctx: &Context) {
    let notices: Vec<_> = shop
        .take_notices()
        .into_iter()
        .filter(|n| n.level != NoticeLevel::Error)
        .collect();
    ctx.output.notices(&notices);
}

/// Print cart lines and totals.
pub fn print_cart<S: KvStore>(shop: &Shop<S>, ctx: &Context) {
    let pricing = shop.cart_pricing();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "lines": shop.cart_lines(),
            "pricing": pricing,
        }));
        return;
    }

    ctx.output.header(&format!("Cart ({})", pricing.item_count));
    if shop.cart().is_empty() {
        ctx.output.info("Your cart is empty");
        return;
    }

    ctx.output
        .table_row(&["ITEM", "OPTION", "QTY", "PRICE", "TOTAL"], &WIDTHS);
    for line in shop.cart_lines() {
        let option = line.variant.as_ref().map(VariantTag::as_str).unwrap_or("-");
        let name = format!("{} {}", line.image, line.name);
        let quantity = line.quantity.to_string();
        let price = line.price.display();
        let total = line.line_total().display();
        ctx.output
            .table_row(&[&name, option, &quantity, &price, &total], &WIDTHS);
    }

    ctx.output.info("");
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    ctx.output.kv("Shipping", &pricing.shipping_display());
    ctx.output.kv("Total", &pricing.total.display());
    ctx.output
        .kv("Policy", &shop.config().shipping.describe());
}
