//! Filter state and the product predicate.

use crate::catalog::{CategoryFilter, Product};
use crate::error::ShopError;
use crate::ids::{Brand, Subcategory};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Default price ceiling, in dollars.
pub const DEFAULT_PRICE_CEILING: i64 = 1000;

/// A star-rating checkbox, held in tenths of a star.
///
/// The 5-star box accepts ratings from 4.5 up and the 4-star box from 4.0
/// up; any other threshold, fractional ones such as 3.5 included, accepts
/// ratings at or above its own value. On the wire it is a plain number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RatingThreshold(u8);

impl RatingThreshold {
    const MAX_TENTHS: u8 = 50;

    /// A whole-star checkbox. Values above 5 are capped at 5.
    pub const fn stars(stars: u8) -> Self {
        let tenths = if stars >= 5 { Self::MAX_TENTHS } else { stars * 10 };
        Self(tenths)
    }

    /// A threshold in tenths of a star, e.g. `35` for 3.5.
    pub fn from_tenths(tenths: u8) -> Result<Self, ShopError> {
        if tenths > Self::MAX_TENTHS {
            return Err(ShopError::InvalidRating(format!("{:.1}", f64::from(tenths) / 10.0)));
        }
        Ok(Self(tenths))
    }

    pub fn tenths(&self) -> u8 {
        self.0
    }

    /// Lowest rating that satisfies this threshold.
    pub fn min_rating(&self) -> f64 {
        match self.0 {
            Self::MAX_TENTHS => 4.5,
            tenths => f64::from(tenths) / 10.0,
        }
    }

    pub fn is_satisfied_by(&self, rating: f64) -> bool {
        rating >= self.min_rating()
    }
}

impl TryFrom<f64> for RatingThreshold {
    type Error = ShopError;

    fn try_from(stars: f64) -> Result<Self, Self::Error> {
        let tenths = (stars * 10.0).round();
        if !(0.0..=f64::from(Self::MAX_TENTHS)).contains(&tenths) {
            return Err(ShopError::InvalidRating(stars.to_string()));
        }
        Self::from_tenths(tenths as u8)
    }
}

impl From<RatingThreshold> for f64 {
    fn from(threshold: RatingThreshold) -> Self {
        f64::from(threshold.0) / 10.0
    }
}

impl FromStr for RatingThreshold {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stars: f64 = s
            .trim()
            .parse()
            .map_err(|_| ShopError::InvalidRating(s.to_string()))?;
        Self::try_from(stars)
    }
}

impl fmt::Display for RatingThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 10 == 0 {
            write!(f, "{}+ stars", self.0 / 10)
        } else {
            write!(f, "{}.{}+ stars", self.0 / 10, self.0 % 10)
        }
    }
}

/// The complete filter state. Every field always holds a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Selected category tab.
    pub category: CategoryFilter,
    /// Selected subcategory; `None` is "all".
    pub subcategory: Option<Subcategory>,
    /// Price slider ceiling.
    pub price_range: Money,
    /// Explicit lower price bound.
    pub min_price: Option<Money>,
    /// Explicit upper price bound.
    pub max_price: Option<Money>,
    /// Selected brands; empty means any brand.
    pub brands: BTreeSet<Brand>,
    /// Selected rating thresholds; empty means any rating.
    pub ratings: BTreeSet<RatingThreshold>,
    /// Lower-cased search term; empty means no text filter.
    pub search: String,
}

impl FilterState {
    /// Default filters with the given price ceiling.
    pub fn with_ceiling(price_range: Money) -> Self {
        Self {
            category: CategoryFilter::All,
            subcategory: None,
            price_range,
            min_price: None,
            max_price: None,
            brands: BTreeSet::new(),
            ratings: BTreeSet::new(),
            search: String::new(),
        }
    }

    /// Merge a partial change into this state.
    ///
    /// A category change resets the subcategory to "all" unless the same
    /// change also names a subcategory.
    pub fn apply(&mut self, change: FilterChange) {
        if let Some(category) = change.category {
            self.category = category;
            self.subcategory = None;
        }
        if let Some(subcategory) = change.subcategory {
            self.subcategory = subcategory;
        }
        if let Some(price_range) = change.price_range {
            self.price_range = price_range;
        }
        if let Some(min_price) = change.min_price {
            self.min_price = min_price;
        }
        if let Some(max_price) = change.max_price {
            self.max_price = max_price;
        }
        if let Some(brands) = change.brands {
            self.brands = brands;
        }
        if let Some(ratings) = change.ratings {
            self.ratings = ratings;
        }
        if let Some(search) = change.search {
            self.search = search.trim().to_lowercase();
        }
    }

    /// Whether a product passes every active filter.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product.category) {
            return false;
        }

        if let Some(subcategory) = &self.subcategory {
            if product.subcategory.as_ref() != Some(subcategory) {
                return false;
            }
        }

        if product.price > self.price_range {
            return false;
        }

        if self.min_price.map_or(false, |min| product.price < min) {
            return false;
        }
        if self.max_price.map_or(false, |max| product.price > max) {
            return false;
        }

        if !self.brands.is_empty() && !self.brands.contains(&product.brand) {
            return false;
        }

        if !self.ratings.is_empty()
            && !self
                .ratings
                .iter()
                .any(|threshold| threshold.is_satisfied_by(product.rating))
        {
            return false;
        }

        self.search.is_empty() || product.matches_text(&self.search)
    }

    /// Number of narrowing filters in effect, for a "filters (n)" badge.
    pub fn active_count(&self) -> usize {
        [
            self.category != CategoryFilter::All,
            self.subcategory.is_some(),
            self.min_price.is_some() || self.max_price.is_some(),
            !self.brands.is_empty(),
            !self.ratings.is_empty(),
            !self.search.is_empty(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_ceiling(Money::dollars(DEFAULT_PRICE_CEILING))
    }
}

/// Products passing `filters`, in catalog order.
pub fn filter_products<'a>(products: &'a [Product], filters: &FilterState) -> Vec<&'a Product> {
    products.iter().filter(|p| filters.matches(p)).collect()
}

/// A partial update to [`FilterState`]. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterChange {
    pub category: Option<CategoryFilter>,
    pub subcategory: Option<Option<Subcategory>>,
    pub price_range: Option<Money>,
    pub min_price: Option<Option<Money>>,
    pub max_price: Option<Option<Money>>,
    pub brands: Option<BTreeSet<Brand>>,
    pub ratings: Option<BTreeSet<RatingThreshold>>,
    pub search: Option<String>,
}

impl FilterChange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<CategoryFilter>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn subcategory(mut self, subcategory: Option<Subcategory>) -> Self {
        self.subcategory = Some(subcategory);
        self
    }

    pub fn price_range(mut self, ceiling: Money) -> Self {
        self.price_range = Some(ceiling);
        self
    }

    pub fn price_bounds(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = Some(min);
        self.max_price = Some(max);
        self
    }

    pub fn brands(mut self, brands: impl IntoIterator<Item = Brand>) -> Self {
        self.brands = Some(brands.into_iter().collect());
        self
    }

    pub fn ratings(mut self, ratings: impl IntoIterator<Item = RatingThreshold>) -> Self {
        self.ratings = Some(ratings.into_iter().collect());
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Whether this change touches no field at all.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
