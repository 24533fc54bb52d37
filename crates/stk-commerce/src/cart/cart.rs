//! Cart and cart line types.

use crate::catalog::Product;
use crate::ids::{LineKey, ProductId, VariantTag};
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A line in the cart.
///
/// Carries a snapshot of the product fields the cart panel shows, so a
/// stored cart can be rendered without the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product ID.
    pub id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at the time the line was added.
    pub price: Money,
    /// Quantity, always at least 1.
    pub quantity: u32,
    /// Display glyph.
    #[serde(default)]
    pub image: String,
    /// Chosen variant, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<VariantTag>,
}

impl CartLine {
    /// A new line with quantity 1.
    pub fn from_product(product: &Product, variant: Option<VariantTag>) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
            image: product.image.clone(),
            variant,
        }
    }

    /// Identity of this line.
    pub fn key(&self) -> LineKey {
        LineKey::new(self.id, self.variant.clone())
    }

    fn has_key(&self, key: &LineKey) -> bool {
        self.id == key.product_id && self.variant == key.variant
    }

    /// Price times quantity.
    pub fn line_total(&self) -> Money {
        self.price * i64::from(self.quantity)
    }
}

/// Result of [`Cart::update_quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line now has this quantity.
    Updated(u32),
    /// The quantity dropped to zero or below and the line was removed.
    Removed,
    /// No line with that key; nothing changed.
    Missing,
}

/// A shopping cart. Serializes as a bare JSON array of lines.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from stored lines.
    ///
    /// Lines sharing a key are merged, and zero-quantity or negative-price
    /// lines are dropped, so hand-edited or stale data cannot break the
    /// one-line-per-key rule or push a total below zero.
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity == 0 {
                continue;
            }
            if line.price.is_negative() {
                warn!(product_id = %line.id, price = %line.price, "Dropping stored cart line with negative price");
                continue;
            }
            match cart.lines.iter_mut().find(|l| l.has_key(&line.key())) {
                Some(existing) => existing.quantity = existing.quantity.saturating_add(line.quantity),
                None => cart.lines.push(line),
            }
        }
        cart
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing line for `(product, variant)` or appends a new
    /// line with quantity 1. Returns the line's new quantity.
    pub fn add(&mut self, product: &Product, variant: Option<VariantTag>) -> u32 {
        let key = LineKey::new(product.id, variant);
        if let Some(existing) = self.lines.iter_mut().find(|l| l.has_key(&key)) {
            existing.quantity = existing.quantity.saturating_add(1);
            return existing.quantity;
        }

        self.lines.push(CartLine::from_product(product, key.variant));
        1
    }

    /// Remove a line. Returns whether a line was removed.
    pub fn remove(&mut self, key: &LineKey) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| !l.has_key(key));
        self.lines.len() < len_before
    }

    /// Add `delta` to a line's quantity, removing it at zero or below.
    pub fn update_quantity(&mut self, key: &LineKey, delta: i64) -> QuantityChange {
        let Some(line) = self.lines.iter_mut().find(|l| l.has_key(key)) else {
            return QuantityChange::Missing;
        };

        let next = i64::from(line.quantity).saturating_add(delta);
        if next <= 0 {
            self.remove(key);
            return QuantityChange::Removed;
        }

        line.quantity = u32::try_from(next).unwrap_or(u32::MAX);
        QuantityChange::Updated(line.quantity)
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by key.
    pub fn get(&self, key: &LineKey) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.has_key(key))
    }

    /// Total item count (sum of quantities), shown on the cart badge.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of price times quantity over every line.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Cart::from_lines(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}
