//! Shopping cart module.
//!
//! Contains the cart, its lines and the cart panel totals.

#[allow(clippy::module_inception)]
mod cart;
mod pricing;

pub use cart::{Cart, CartLine, QuantityChange};
pub use pricing::CartPricing;
