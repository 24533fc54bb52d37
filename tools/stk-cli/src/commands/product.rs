//! Product detail and search suggestion commands.

use anyhow::{bail, Result};
use stk_commerce::catalog::CategoryFilter;
use stk_commerce::search::{FilterChange, Suggestions};
use stk_commerce::ProductId;

use super::{ShowArgs, SuggestArgs};
use crate::context::Context;
use crate::output::stock_badge;

/// Run the show command.
pub fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop()?;
    let Some(product) = shop.quick_view(ProductId::new(args.id)) else {
        bail!("Product not found: {}", args.id);
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output
        .header(&format!("{} {}", product.image, product.name));
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv("Category", product.category.display_name());
    if let Some(subcategory) = &product.subcategory {
        ctx.output.kv("Type", subcategory.as_str());
    }
    ctx.output.kv("Brand", product.brand.as_str());
    ctx.output.kv(
        "Rating",
        &format!(
            "{} {:.1} ({} reviews)",
            product.star_rating().render(),
            product.rating,
            product.reviews
        ),
    );
    ctx.output.kv("Status", &stock_badge(product.in_stock));
    if !product.description.is_empty() {
        ctx.output.kv("About", &product.description);
    }
    if !product.tags.is_empty() {
        ctx.output.kv("Tags", &product.tags.join(", "));
    }
    if product.requires_variant() {
        ctx.output
            .info("Choose an option with --variant when adding this to the cart.");
    }

    Ok(())
}

/// Run the suggest command.
pub fn suggest(args: SuggestArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    let names: Vec<String> = match shop.suggestions(&args.query) {
        Suggestions::Hidden => return Ok(()),
        Suggestions::NoResults => {
            if ctx.output.is_json() {
                ctx.output.json(&Vec::<String>::new());
            } else {
                ctx.output.info("No products found");
            }
            return Ok(());
        }
        Suggestions::Matches(products) => products.iter().map(|p| p.name.clone()).collect(),
    };

    let selected = if args.select { names.first() } else { None };
    if let Some(first) = selected {
        // Suggestions span every category.
        shop.set_filter(FilterChange::new().category(CategoryFilter::All));
        shop.select_suggestion(first);
        let results = shop.visible_products();
        if ctx.output.is_json() {
            ctx.output.json(&results.items);
        } else {
            ctx.output.header(&shop.results_label());
            for product in &results.items {
                ctx.output
                    .list_item(&format!("{} {} ({})", product.id, product.name, product.price));
            }
        }
        return Ok(());
    }

    if ctx.output.is_json() {
        ctx.output.json(&names);
        return Ok(());
    }

    for name in &names {
        ctx.output.list_item(name);
    }

    Ok(())
}
