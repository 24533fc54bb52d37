//! End-to-end storefront flows over an in-memory store.

use stk_cache::MemoryStore;
use stk_commerce::prelude::*;
use stk_commerce::search::filter_products;

fn open_all() -> Shop<MemoryStore> {
    let config = ShopConfig::default().with_default_category(CategoryFilter::All);
    Shop::open(MemoryStore::new(), config)
}

fn visible_ids(shop: &Shop<MemoryStore>) -> Vec<u32> {
    shop.visible_products()
        .items
        .iter()
        .map(|p| p.id.get())
        .collect()
}

#[test]
fn visible_products_are_a_filtered_subset_of_the_catalog() {
    let mut shop = open_all();
    shop.set_filter(
        FilterChange::new()
            .category(Category::Money)
            .price_bounds(None, Some(Money::dollars(1)))
            .ratings([RatingThreshold::stars(5)]),
    );

    let visible = shop.filtered_products();
    assert!(!visible.is_empty());
    for product in &visible {
        assert!(shop.catalog().get(product.id).is_some());
        assert_eq!(product.category, Category::Money);
        assert!(product.price <= Money::dollars(1));
        assert!(product.rating >= 4.5);
    }

    let expected = filter_products(shop.catalog().products(), shop.filters());
    assert_eq!(visible.len(), expected.len());
}

#[test]
fn filter_changes_reset_the_page() {
    let config = ShopConfig::default()
        .with_default_category(CategoryFilter::All)
        .with_page_size(2);
    let mut shop = Shop::open(MemoryStore::new(), config);

    let changes = vec![
        FilterChange::new().category(CategoryFilter::All),
        FilterChange::new().price_range(Money::dollars(500)),
        FilterChange::new().search("max"),
        FilterChange::new().brands([Brand::new("STK Supply")]),
        FilterChange::new().ratings([RatingThreshold::stars(4)]),
    ];

    for change in changes {
        shop.go_to_page(2);
        assert_eq!(shop.pagination().page, 2);
        shop.set_filter(change);
        assert_eq!(shop.pagination().page, 1);
    }
}

#[test]
fn page_slices_and_selector() {
    let config = ShopConfig::default()
        .with_default_category(CategoryFilter::All)
        .with_page_size(2);
    let mut shop = Shop::open(MemoryStore::new(), config);

    let pagination = shop.pagination();
    assert_eq!(pagination.total_pages, 5);
    assert_eq!(shop.visible_products().len(), 2);

    shop.go_to_page(5);
    assert_eq!(shop.visible_products().len(), 1);
    assert_eq!(
        shop.pagination().page_window(),
        vec![PageMarker::Page(1), PageMarker::Ellipsis, PageMarker::Page(4), PageMarker::Page(5)]
    );
}

#[test]
fn adding_twice_merges_into_one_line() {
    let mut shop = open_all();
    shop.add_to_cart(ProductId::new(4), None).unwrap();
    assert_eq!(shop.add_to_cart(ProductId::new(4), None).unwrap(), 2);

    assert_eq!(shop.cart_lines().len(), 1);
    assert_eq!(shop.cart_lines()[0].quantity, 2);
    assert_eq!(shop.cart_pricing().item_count, 2);
}

#[test]
fn decrementing_to_zero_removes_the_line() {
    let mut shop = open_all();
    shop.add_to_cart(ProductId::new(5), None).unwrap();
    shop.add_to_cart(ProductId::new(5), None).unwrap();
    let key = LineKey::product(ProductId::new(5));

    assert_eq!(shop.update_quantity(&key, -2), QuantityChange::Removed);
    assert!(shop.cart().is_empty());

    let revision = shop.revision();
    assert_eq!(shop.update_quantity(&key, -2), QuantityChange::Missing);
    assert_eq!(shop.revision(), revision);
    assert!(!shop.remove_from_cart(&key));
}

#[test]
fn checkout_totals_and_empties_the_cart() {
    let mut shop = open_all();
    shop.add_to_cart(ProductId::new(1), Some("Alpha")).unwrap();
    shop.add_to_cart(ProductId::new(6), None).unwrap();
    shop.add_to_cart(ProductId::new(6), None).unwrap();

    let summary = shop.checkout().unwrap();
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.total, Money::dollars(7));
    assert!(summary.message().contains("Total: $7.00"));
    assert!(shop.cart().is_empty());
    assert_eq!(shop.store().get_str("cart"), Some("[]"));

    let notices = shop.take_notices();
    assert_eq!(notices.last(), Some(&Notice::info("Redirecting to checkout...")));

    let revision = shop.revision();
    assert!(matches!(shop.checkout(), Err(ShopError::EmptyCart)));
    assert_eq!(shop.revision(), revision);
    assert_eq!(shop.take_notices(), vec![Notice::error("Your cart is empty!")]);
}

#[test]
fn stored_cart_round_trips() {
    let mut shop = open_all();
    shop.add_to_cart(ProductId::new(1), Some("Alpha")).unwrap();
    shop.add_to_cart(ProductId::new(1), Some("Beta")).unwrap();
    shop.add_to_cart(ProductId::new(7), None).unwrap();
    shop.add_to_cart(ProductId::new(7), None).unwrap();
    let before = shop.cart().clone();

    let reopened = Shop::open(shop.into_store(), ShopConfig::default());
    assert_eq!(reopened.cart(), &before);

    let alpha = LineKey::new(ProductId::new(1), Some(VariantTag::new("Alpha")));
    let line = reopened.cart().get(&alpha).unwrap();
    assert_eq!(line.quantity, 1);
    assert_eq!(line.price, Money::dollars(3));
    assert_eq!(reopened.cart().item_count(), 4);
}

#[test]
fn weapons_require_a_variant() {
    let mut shop = open_all();

    let err = shop.add_to_cart(ProductId::new(1), None).unwrap_err();
    assert!(matches!(err, ShopError::MissingSelection { .. }));
    assert!(shop.cart().is_empty());
    assert!(shop.store().get_str("cart").is_none());

    shop.add_to_cart(ProductId::new(1), Some("Alpha")).unwrap();
    assert_eq!(shop.cart_lines().len(), 1);
    assert_eq!(shop.cart_lines()[0].quantity, 1);
    assert_eq!(shop.cart_pricing().subtotal, Money::dollars(3));
}

#[test]
fn sort_examples() {
    let catalog = Catalog::new(vec![
        Product::new(1, "A", Money::dollars(3), Category::Money).with_rating(4.0, 1),
        Product::new(2, "B", Money::dollars(1), Category::Money)
            .with_rating(4.5, 1)
            .featured(),
        Product::new(3, "C", Money::dollars(2), Category::Money).with_rating(4.9, 1),
    ]);
    let config = ShopConfig::default().with_default_category(CategoryFilter::All);
    let mut shop = Shop::with_catalog(catalog, MemoryStore::new(), config);

    assert_eq!(visible_ids(&shop)[0], 2);

    shop.set_sort(SortOption::PriceLow);
    let prices: Vec<Money> = shop.visible_products().items.iter().map(|p| p.price).collect();
    assert_eq!(prices, vec![Money::dollars(1), Money::dollars(2), Money::dollars(3)]);
}

#[test]
fn malformed_stored_cart_starts_empty() {
    let store = MemoryStore::with_entry("cart", "{not json");
    let mut shop = Shop::open(store, ShopConfig::default());
    assert!(shop.cart().is_empty());

    shop.add_to_cart(ProductId::new(4), None).unwrap();
    assert!(shop.store().get_str("cart").is_some());
    assert_eq!(shop.cart().item_count(), 1);
}

#[test]
fn name_sort_ignores_accents() {
    let catalog = Catalog::new(vec![
        Product::new(1, "Zebra Watch", Money::dollars(1), Category::Watches),
        Product::new(2, "\u{c9}clair Watch", Money::dollars(1), Category::Watches),
        Product::new(3, "apple Watch", Money::dollars(1), Category::Watches),
    ]);
    let config = ShopConfig::default().with_default_category(CategoryFilter::All);
    let mut shop = Shop::with_catalog(catalog, MemoryStore::new(), config);

    shop.set_sort(SortOption::Name);
    let names: Vec<&str> = shop
        .visible_products()
        .items
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["apple Watch", "\u{c9}clair Watch", "Zebra Watch"]);
}

#[test]
fn stored_cart_with_negative_price_is_dropped() {
    let stored = r#"[
        {"id": 5, "name": "Max Bank 990k", "price": -50.0, "quantity": 1},
        {"id": 4, "name": "Max Money 990k", "price": 1.0, "quantity": 1}
    ]"#;
    let shop = Shop::open(MemoryStore::with_entry("cart", stored), ShopConfig::default());

    assert_eq!(shop.cart().len(), 1);
    let pricing = shop.cart_pricing();
    assert_eq!(pricing.subtotal, Money::dollars(1));
    assert_eq!(pricing.total, Money::new(1099));
}

#[test]
fn stored_cart_with_huge_price_saturates() {
    let stored = r#"[{"id": 5, "name": "Max Bank 990k", "price": 1e17, "quantity": 1000}]"#;
    let mut shop = Shop::open(MemoryStore::with_entry("cart", stored), ShopConfig::default());

    let pricing = shop.cart_pricing();
    assert_eq!(pricing.subtotal, Money::new(i64::MAX));
    assert_eq!(pricing.total, Money::new(i64::MAX));

    let summary = shop.checkout().unwrap();
    assert_eq!(summary.total, Money::new(i64::MAX));
    assert!(shop.cart().is_empty());
}

#[test]
fn query_string_preselects_category() {
    let mut shop = Shop::open(MemoryStore::new(), ShopConfig::default());
    assert!(shop.apply_query("?category=money"));
    assert_eq!(visible_ids(&shop), vec![4, 6, 5, 7]);

    assert!(!shop.apply_query("?category=books"));
    assert_eq!(shop.filters().category, CategoryFilter::Only(Category::Money));
}

#[test]
fn query_string_is_percent_decoded() {
    let mut shop = Shop::open(MemoryStore::new(), ShopConfig::default());
    assert!(shop.apply_query("?category=%77atches"));
    assert_eq!(visible_ids(&shop), vec![8]);
}

#[test]
fn suggestions_from_the_search_box() {
    let shop = open_all();
    assert_eq!(shop.suggestions("  "), Suggestions::Hidden);
    assert_eq!(shop.suggestions("zzz"), Suggestions::NoResults);

    let names: Vec<&str> = shop
        .suggestions("BANK")
        .products()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Max Bank 990k", "Max Bank 1.6M (Gamepass)"]);
}
