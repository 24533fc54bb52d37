//! Storefront configuration.

use crate::catalog::{Category, CategoryFilter};
use crate::checkout::ShippingPolicy;
use crate::money::Money;
use crate::search::{DEFAULT_PAGE_SIZE, DEFAULT_PRICE_CEILING};
use serde::{Deserialize, Serialize};

/// Storage slot the cart is mirrored to.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// Settings for a [`Shop`](crate::Shop) session.
///
/// Every field has a default, so a partial config file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Key of the storage slot holding the cart.
    pub storage_key: String,
    /// Products per page.
    pub page_size: usize,
    /// Category tab selected when the shop opens.
    pub default_category: CategoryFilter,
    /// Initial price slider ceiling.
    pub price_ceiling: Money,
    /// How the cart panel charges shipping.
    pub shipping: ShippingPolicy,
}

impl ShopConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn with_default_category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.default_category = category.into();
        self
    }

    pub fn with_shipping(mut self, shipping: ShippingPolicy) -> Self {
        self.shipping = shipping;
        self
    }
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            default_category: CategoryFilter::Only(Category::Weapons),
            price_ceiling: Money::dollars(DEFAULT_PRICE_CEILING),
            shipping: ShippingPolicy::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.page_size, 12);
        assert_eq!(config.default_category, CategoryFilter::Only(Category::Weapons));
        assert_eq!(config.price_ceiling, Money::dollars(1000));
    }

    #[test]
    fn test_partial_json() {
        let config: ShopConfig =
            serde_json::from_str(r#"{"page_size": 6, "default_category": "all"}"#).unwrap();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.default_category, CategoryFilter::All);
        assert_eq!(config.storage_key, "cart");
    }

    #[test]
    fn test_builder_clamps_page_size() {
        assert_eq!(ShopConfig::default().with_page_size(0).page_size, 1);
    }
}
