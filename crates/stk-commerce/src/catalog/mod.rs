//! Product catalog module.
//!
//! Contains the product and category types and the static catalog a
//! session is loaded from.

mod category;
mod product;
mod seed;

pub use category::{Category, CategoryFilter};
pub use product::{Product, StarRating};
pub use seed::stk_products;

use crate::ids::ProductId;
use serde::Serialize;

/// The fixed product list for a session.
///
/// Lookups are linear scans; the catalog holds a few dozen records at most.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in STK Supply catalog.
    pub fn stk() -> Self {
        Self::new(stk_products())
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by exact name.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product counts for the "all" tab and each category.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .map(|filter| CategoryCount {
                category: filter,
                count: self
                    .products
                    .iter()
                    .filter(|p| filter.matches(p.category))
                    .count(),
            })
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::stk()
    }
}

/// Number of products under a category tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: CategoryFilter,
    pub count: usize,
}
