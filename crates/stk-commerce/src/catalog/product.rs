//! Product type.

use crate::catalog::Category;
use crate::ids::{Brand, ProductId, Subcategory};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog. Immutable for the lifetime of a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier. Higher ids are newer listings.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Product line.
    pub category: Category,
    /// Narrower grouping within the category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<Subcategory>,
    /// Brand tag.
    pub brand: Brand,
    /// Free-text description.
    pub description: String,
    /// Display glyph.
    pub image: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Number of reviews.
    pub reviews: u32,
    /// Whether the product can be purchased.
    pub in_stock: bool,
    /// Whether the product is promoted in the default ordering.
    pub featured: bool,
    /// Tags for search.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Product {
    /// Create an in-stock product with empty descriptive fields.
    pub fn new(id: u32, name: impl Into<String>, price: Money, category: Category) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            category,
            subcategory: None,
            brand: Brand::new("STK Supply"),
            description: String::new(),
            image: String::new(),
            rating: 0.0,
            reviews: 0,
            in_stock: true,
            featured: false,
            tags: Vec::new(),
        }
    }

    pub fn with_subcategory(mut self, subcategory: impl Into<Subcategory>) -> Self {
        self.subcategory = Some(subcategory.into());
        self
    }

    pub fn with_brand(mut self, brand: impl Into<Brand>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn with_rating(mut self, rating: f64, reviews: u32) -> Self {
        self.rating = rating.clamp(0.0, 5.0);
        self.reviews = reviews;
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Whether a variant must be chosen before adding this to the cart.
    pub fn requires_variant(&self) -> bool {
        self.category.requires_variant()
    }

    /// Case-insensitive substring match against name, description and tags.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.tags_contain(needle)
    }

    /// Case-insensitive substring match against name and tags only.
    ///
    /// `needle` must already be lower-cased.
    pub fn matches_name_or_tag(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.tags_contain(needle)
    }

    fn tags_contain(&self, needle: &str) -> bool {
        self.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
    }

    /// Star breakdown for display.
    pub fn star_rating(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }
}

/// Full, half and empty star counts out of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    /// Any fractional part renders as a half star.
    pub fn from_rating(rating: f64) -> Self {
        let rating = rating.clamp(0.0, 5.0);
        let full = rating.floor() as u8;
        let half = rating.fract() > 0.0;
        let empty = 5 - full - half as u8;
        Self { full, half, empty }
    }

    /// Render as text, e.g. "★★★★½".
    pub fn render(&self) -> String {
        let mut s = "\u{2605}".repeat(self.full as usize);
        if self.half {
            s.push('\u{00bd}');
        }
        s.push_str(&"\u{2606}".repeat(self.empty as usize));
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new(1, "Street Arsenal - Safe", Money::dollars(3), Category::Weapons)
            .with_description("Essential gear for the streets")
            .with_tags(["arsenal", "safe"])
    }

    #[test]
    fn test_product_creation() {
        let product = sample();
        assert_eq!(product.id, ProductId::new(1));
        assert!(product.in_stock);
        assert!(!product.featured);
        assert!(product.requires_variant());
    }

    #[test]
    fn test_text_match() {
        let product = sample();
        assert!(product.matches_text("arsenal"));
        assert!(product.matches_text("streets"));
        assert!(product.matches_text("safe"));
        assert!(!product.matches_text("watch"));

        assert!(product.matches_name_or_tag("safe"));
        assert!(!product.matches_name_or_tag("essential"));
    }

    #[test]
    fn test_star_rating() {
        assert_eq!(
            StarRating::from_rating(4.9),
            StarRating { full: 4, half: true, empty: 0 }
        );
        assert_eq!(
            StarRating::from_rating(4.0),
            StarRating { full: 4, half: false, empty: 1 }
        );
        assert_eq!(
            StarRating::from_rating(0.0),
            StarRating { full: 0, half: false, empty: 5 }
        );
        assert_eq!(StarRating::from_rating(5.0).render(), "\u{2605}".repeat(5));
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["inStock"], true);
        assert_eq!(json["price"], 3.0);
        assert_eq!(json["category"], "weapons");
    }
}
