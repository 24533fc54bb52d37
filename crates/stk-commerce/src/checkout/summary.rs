//! Checkout summary.

use crate::cart::{Cart, CartLine};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// What was bought in a completed (simulated) checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutSummary {
    /// Sum of quantities.
    pub item_count: u64,
    /// Sum of price times quantity. Shipping is not included.
    pub total: Money,
    /// The lines that were checked out.
    pub lines: Vec<CartLine>,
}

impl CheckoutSummary {
    /// Summarize a cart. Returns `None` for an empty cart.
    pub fn from_cart(cart: &Cart) -> Option<Self> {
        if cart.is_empty() {
            return None;
        }
        Some(Self {
            item_count: cart.item_count(),
            total: cart.subtotal(),
            lines: cart.lines().to_vec(),
        })
    }

    /// Confirmation text shown to the shopper.
    pub fn message(&self) -> String {
        format!(
            "Checkout Summary:\n\nItems: {}\nTotal: {}\n\nThank you for your purchase!",
            self.item_count, self.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Product};

    #[test]
    fn test_summary_total() {
        let mut cart = Cart::new();
        let a = Product::new(1, "A", Money::new(300), Category::Money);
        let b = Product::new(2, "B", Money::new(150), Category::Money);
        cart.add(&a, None);
        cart.add(&b, None);
        cart.add(&b, None);

        let summary = CheckoutSummary::from_cart(&cart).unwrap();
        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total, Money::new(600));
        assert_eq!(summary.lines.len(), 2);
        assert!(summary.message().contains("Total: $6.00"));
    }

    #[test]
    fn test_empty_cart_has_no_summary() {
        assert!(CheckoutSummary::from_cart(&Cart::new()).is_none());
    }
}
