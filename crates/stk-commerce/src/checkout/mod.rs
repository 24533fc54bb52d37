//! Checkout module.
//!
//! Contains the shipping policy and the simulated checkout summary.

mod shipping;
mod summary;

pub use shipping::{ShippingPolicy, DEFAULT_FREE_SHIPPING_THRESHOLD, DEFAULT_SHIPPING_FEE};
pub use summary::CheckoutSummary;
