//! Shipping policy.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Default flat shipping fee ($9.99).
pub const DEFAULT_SHIPPING_FEE: Money = Money::new(999);

/// Subtotal from which the flat fee is waived ($50.00).
pub const DEFAULT_FREE_SHIPPING_THRESHOLD: Money = Money::new(5000);

/// How shipping is charged on a cart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum ShippingPolicy {
    /// A flat fee, waived once the subtotal reaches `free_over`.
    Flat { fee: Money, free_over: Money },
    /// Never charge shipping (digital goods).
    Free,
}

impl ShippingPolicy {
    /// Shipping charge for a subtotal.
    pub fn rate(&self, subtotal: Money) -> Money {
        match self {
            ShippingPolicy::Flat { fee, free_over } if subtotal < *free_over => *fee,
            _ => Money::zero(),
        }
    }

    /// Check if this policy never charges.
    pub fn is_free(&self) -> bool {
        match self {
            ShippingPolicy::Flat { fee, .. } => fee.is_zero(),
            ShippingPolicy::Free => true,
        }
    }

    /// Short description for the cart panel.
    pub fn describe(&self) -> String {
        match self {
            ShippingPolicy::Flat { fee, free_over } => {
                format!("{} flat, free on orders of {} or more", fee, free_over)
            }
            ShippingPolicy::Free => "Free shipping".to_string(),
        }
    }
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy::Flat {
            fee: DEFAULT_SHIPPING_FEE,
            free_over: DEFAULT_FREE_SHIPPING_THRESHOLD,
        }
    }
}
