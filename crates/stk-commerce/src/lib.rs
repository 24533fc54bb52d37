//! Catalog, filtering, cart and checkout logic for the STK Supply storefront.
//!
//! - **Catalog**: Products, categories and the built-in STK product list
//! - **Search**: Filter state, sort options, pagination, suggestions
//! - **Cart**: Cart lines keyed by product and variant, pricing
//! - **Checkout**: Shipping policy, checkout summary
//! - **Shop**: The view-model tying these together over a key-value store
//!
//! # Example
//!
//! ```rust
//! use stk_cache::MemoryStore;
//! use stk_commerce::prelude::*;
//!
//! let mut shop = Shop::open(MemoryStore::new(), ShopConfig::default());
//!
//! // Weapons need an option before they can go in the cart.
//! assert!(shop.add_to_cart(ProductId::new(1), None).is_err());
//! shop.add_to_cart(ProductId::new(1), Some("Alpha")).unwrap();
//!
//! let pricing = shop.cart_pricing();
//! assert_eq!(pricing.subtotal.display(), "$3.00");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod notice;
pub mod search;
pub mod shop;

pub use config::ShopConfig;
pub use error::ShopError;
pub use ids::*;
pub use money::Money;
pub use shop::Shop;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ShopConfig;
    pub use crate::error::ShopError;
    pub use crate::ids::*;
    pub use crate::money::Money;
    pub use crate::notice::{Notice, NoticeLevel};
    pub use crate::shop::Shop;

    // Catalog
    pub use crate::catalog::{Catalog, Category, CategoryCount, CategoryFilter, Product, StarRating};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, QuantityChange};

    // Checkout
    pub use crate::checkout::{CheckoutSummary, ShippingPolicy};

    // Search
    pub use crate::search::{
        FilterChange, FilterState, PageMarker, Pagination, RatingThreshold, SearchResults,
        SortOption, Suggestions,
    };
}
