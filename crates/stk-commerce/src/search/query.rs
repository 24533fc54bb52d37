//! Sort options for the product grid.

use crate::catalog::Product;
use crate::error::ShopError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort options for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Featured products first, then by rating.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by name A-Z.
    Name,
    /// Sort by newest first (highest id).
    Newest,
    /// Sort by highest rated.
    Rating,
}

impl SortOption {
    pub const ALL: [SortOption; 6] = [
        SortOption::Featured,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Name,
        SortOption::Newest,
        SortOption::Rating,
    ];

    /// Wire name, as used in the sort dropdown.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Name => "name",
            SortOption::Newest => "newest",
            SortOption::Rating => "rating",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Name => "Name: A-Z",
            SortOption::Newest => "Newest",
            SortOption::Rating => "Highest Rated",
        }
    }

    /// Ordering of two products under this option.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => b
                .featured
                .cmp(&a.featured)
                .then_with(|| b.rating.total_cmp(&a.rating)),
            SortOption::PriceLow => a.price.cmp(&b.price),
            SortOption::PriceHigh => b.price.cmp(&a.price),
            SortOption::Name => compare_names(&a.name, &b.name),
            SortOption::Newest => b.id.cmp(&a.id),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
        }
    }

    /// Stable sort in place; equal products keep their relative order.
    pub fn sort(&self, products: &mut [&Product]) {
        products.sort_by(|a, b| self.compare(a, b));
    }
}

/// Locale-style name ordering: accents and case are ignored first, raw text
/// breaks ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

/// Primary collation key: NFD with combining marks dropped, then lower-cased.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s.trim())
            .ok_or_else(|| ShopError::InvalidSortOption(s.to_string()))
    }
}
