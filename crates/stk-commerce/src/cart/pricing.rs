//! Cart pricing calculations.

use crate::cart::Cart;
use crate::checkout::ShippingPolicy;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Totals shown in the cart panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartPricing {
    /// Badge count (sum of quantities).
    pub item_count: u64,
    /// Sum of price times quantity.
    pub subtotal: Money,
    /// Shipping charge under the configured policy.
    pub shipping: Money,
    /// Subtotal plus shipping.
    pub total: Money,
}

impl CartPricing {
    /// Price a cart under a shipping policy.
    pub fn calculate(cart: &Cart, policy: &ShippingPolicy) -> Self {
        let subtotal = cart.subtotal();
        let shipping = if cart.is_empty() || policy.is_free() {
            Money::zero()
        } else {
            policy.rate(subtotal)
        };

        Self {
            item_count: cart.item_count(),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }

    /// Shipping line text: "Free" or the amount.
    pub fn shipping_display(&self) -> String {
        if self.shipping.is_zero() {
            "Free".to_string()
        } else {
            self.shipping.display()
        }
    }
}
