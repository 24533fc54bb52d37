//! Shop error types.

use crate::catalog::Category;
use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// None of these leave partial state behind: an operation that returns an
/// error has not changed the filters, the cart or its stored mirror.
#[derive(Error, Debug)]
pub enum ShopError {
    /// A variant-requiring product was added without a variant chosen.
    #[error("Please select an option for {category} products before adding to cart")]
    MissingSelection { product_id: ProductId, category: Category },

    /// Checkout was attempted with no cart lines.
    #[error("Your cart is empty!")]
    EmptyCart,

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Product is listed but not purchasable yet.
    #[error("{0} is coming soon")]
    OutOfStock(String),

    /// Unknown sort option name.
    #[error("Invalid sort option: {0}")]
    InvalidSortOption(String),

    /// Unknown category name.
    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    /// Rating threshold outside 0 to 5 stars.
    #[error("Invalid rating: {0}")]
    InvalidRating(String),

    /// The cart could not be written to its store.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ShopError {
    /// Whether this error is a condition the shopper can fix themselves.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            ShopError::MissingSelection { .. }
                | ShopError::EmptyCart
                | ShopError::ProductNotFound(_)
                | ShopError::OutOfStock(_)
        )
    }
}

impl From<stk_cache::CacheError> for ShopError {
    fn from(e: stk_cache::CacheError) -> Self {
        ShopError::Storage(e.to_string())
    }
}
