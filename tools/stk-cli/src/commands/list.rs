//! Catalog browsing commands.

use anyhow::{Context as _, Result};
use serde_json::json;
use stk_cache::KvStore;
use stk_commerce::catalog::{CategoryFilter, Product};
use stk_commerce::search::{FilterChange, SortOption};
use stk_commerce::{Brand, Money, Shop, Subcategory};

use super::ListArgs;
use crate::context::Context;
use crate::output::{stock_badge, truncate};

const WIDTHS: [usize; 5] = [4, 28, 8, 14, 12];

/// Run the list command.
pub fn run(args: ListArgs, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_shop()?;

    if let Some(query) = &args.query {
        if !shop.apply_query(query) {
            ctx.output.debug(&format!("No category in query: {}", query));
        }
    }

    let change = filter_change(&args)?;
    if !change.is_empty() {
        shop.set_filter(change);
    }

    if let Some(sort) = &args.sort {
        let sort: SortOption = sort.parse().context("Unknown --sort value")?;
        shop.set_sort(sort);
    }

    shop.go_to_page(args.page);
    print_page(&shop, ctx);
    Ok(())
}

/// Translate command line filters into a filter change.
fn filter_change(args: &ListArgs) -> Result<FilterChange> {
    let mut change = FilterChange::new();

    if let Some(category) = &args.category {
        let category: CategoryFilter = category.parse()?;
        change = change.category(category);
    }
    if let Some(subcategory) = &args.subcategory {
        change = change.subcategory(Some(Subcategory::new(subcategory.as_str())));
    }
    if let Some(max) = args.max_price {
        change = change.price_range(Money::from_decimal(max));
    }
    if let Some(min) = args.min_price {
        change = change.price_bounds(Some(Money::from_decimal(min)), None);
    }
    if !args.brand.is_empty() {
        change = change.brands(args.brand.iter().map(|b| Brand::new(b.as_str())));
    }
    if !args.rating.is_empty() {
        change = change.ratings(args.rating.iter().copied());
    }
    if let Some(search) = &args.search {
        change = change.search(search.as_str());
    }

    Ok(change)
}

fn print_page<S: KvStore>(shop: &Shop<S>, ctx: &Context) {
    let results = shop.visible_products();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "label": shop.results_label(),
            "sort": shop.sort(),
            "filters": shop.filters(),
            "pagination": results.pagination,
            "products": results.items,
        }));
        return;
    }

    ctx.output.header(&format!(
        "{} \u{00b7} sorted by {}",
        shop.results_label(),
        shop.sort().display_name()
    ));
    let active = shop.filters().active_count();
    if active > 0 {
        ctx.output.kv("Filters", &format!("{} active", active));
    }

    if results.is_empty() {
        ctx.output.info("No products match these filters.");
        return;
    }

    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "RATING", "STATUS"], &WIDTHS);
    for product in &results.items {
        product_row(product, ctx);
    }

    let pagination = results.pagination;
    ctx.output.kv(
        "Showing",
        &format!(
            "{}-{} of {}",
            pagination.start_item(),
            pagination.end_item(),
            pagination.total
        ),
    );
    ctx.output.pages(&pagination);
}

fn product_row(product: &Product, ctx: &Context) {
    let id = product.id.to_string();
    let name = truncate(&product.name, WIDTHS[1]);
    let price = product.price.display();
    let rating = product.star_rating().render();
    let status = stock_badge(product.in_stock);
    ctx.output
        .table_row(&[&id, &name, &price, &rating, &status], &WIDTHS);
}

/// Run the categories command.
pub fn categories(ctx: &Context) -> Result<()> {
    let shop = ctx.open_shop()?;
    let counts = shop.category_counts();

    if ctx.output.is_json() {
        ctx.output.json(&counts);
        return Ok(());
    }

    ctx.output.header("Categories");
    for count in &counts {
        let name = match count.category {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(category) => category.display_name(),
        };
        ctx.output.kv(name, &count.count.to_string());
    }

    Ok(())
}
