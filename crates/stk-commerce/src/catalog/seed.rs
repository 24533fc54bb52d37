//! The built-in STK Supply catalog.

use crate::catalog::{Category, Product};
use crate::money::Money;

/// Products listed on the storefront.
pub fn stk_products() -> Vec<Product> {
    vec![
        // Weapons
        Product::new(1, "Street Arsenal - Safe", Money::dollars(3), Category::Weapons)
            .with_subcategory("safe")
            .with_description(
                "Essential gear for the streets \u{2022} Fully, buttons, switches, binary, AR9",
            )
            .with_image("\u{1f52b}")
            .with_rating(4.9, 234)
            .with_tags(["arsenal", "safe", "street", "gear"])
            .featured(),
        Product::new(2, "Street Arsenal - Bag", Money::dollars(2), Category::Weapons)
            .with_subcategory("bag")
            .with_description("Premium setups \u{2022} Custom builds \u{2022} Street ready")
            .with_image("\u{1f392}")
            .with_rating(4.8, 189)
            .with_tags(["arsenal", "bag", "storage"])
            .featured(),
        Product::new(3, "Street Arsenal - Trunk", Money::dollars(1), Category::Weapons)
            .with_subcategory("trunk")
            .with_description(
                "Pick from dropdown below \u{2022} Select storage type for your weapon",
            )
            .with_image("\u{1f4e6}")
            .with_rating(4.7, 156)
            .with_tags(["arsenal", "trunk", "storage"]),
        // Money
        Product::new(4, "Max Money 990k", Money::dollars(1), Category::Money)
            .with_subcategory("regular")
            .with_description("Clean money packages \u{2022} Regular & Gamepass options")
            .with_image("\u{1f4b0}")
            .with_rating(4.9, 567)
            .with_tags(["money", "package", "regular"])
            .featured(),
        Product::new(5, "Max Bank 990k", Money::dollars(1), Category::Money)
            .with_subcategory("regular")
            .with_description("Max out your cash \u{2022} Clean money packages")
            .with_image("\u{1f3e6}")
            .with_rating(4.8, 432)
            .with_tags(["money", "bank", "regular"])
            .featured(),
        Product::new(6, "Max Money 1.6M (Gamepass)", Money::dollars(2), Category::Money)
            .with_subcategory("gamepass")
            .with_description("Gamepass exclusive \u{2022} Higher limits available")
            .with_image("\u{1f48e}")
            .with_rating(4.9, 321)
            .with_tags(["money", "gamepass", "premium"])
            .featured(),
        Product::new(7, "Max Bank 1.6M (Gamepass)", Money::dollars(2), Category::Money)
            .with_subcategory("gamepass")
            .with_description("Gamepass bank package \u{2022} Premium service")
            .with_image("\u{1f4b3}")
            .with_rating(4.8, 289)
            .with_tags(["money", "gamepass", "bank"])
            .featured(),
        // Watches
        Product::new(8, "Luxury Watch Collection", Money::dollars(1), Category::Watches)
            .with_subcategory("luxury")
            .with_description(
                "High-end connections \u{2022} Watches & Scripts \u{2022} Designer pieces \u{2022} Custom codes",
            )
            .with_image("\u{231a}")
            .with_rating(4.9, 178)
            .with_tags(["luxury", "watches", "designer"])
            .featured(),
        // Scripts
        Product::new(9, "Custom Scripts Collection", Money::zero(), Category::Scripts)
            .with_subcategory("coming-soon")
            .with_description(
                "Coming Soon \u{2022} Advanced automation scripts \u{2022} Custom development",
            )
            .with_image("\u{1f4bb}")
            .with_tags(["scripts", "automation", "custom"])
            .out_of_stock(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let products = stk_products();
        let ids: HashSet<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_prices_non_negative() {
        assert!(stk_products().iter().all(|p| p.price.amount_cents >= 0));
    }

    #[test]
    fn test_every_category_listed() {
        let products = stk_products();
        for category in Category::ALL {
            assert!(products.iter().any(|p| p.category == category));
        }
    }
}
