//! Money type for representing prices.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. On the wire (cart
//! storage, config files) amounts are plain decimal numbers such as `3.0`.
//!
//! Arithmetic saturates at the `i64` bounds instead of overflowing, so an
//! absurd stored price can never panic a total.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A monetary value in US dollars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "f64", into = "f64")]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub const fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use stk_commerce::money::Money;
    /// let price = Money::from_decimal(49.99);
    /// assert_eq!(price.amount_cents, 4999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Create a zero amount.
    pub const fn zero() -> Self {
        Self::new(0)
    }

    /// Create a whole-dollar amount.
    pub const fn dollars(dollars: i64) -> Self {
        Self::new(dollars * 100)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.amount_cents < 0 { "-" } else { "" };
        format!("{}${}", sign, self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let abs = self.amount_cents.unsigned_abs();
        format!("{}.{:02}", abs / 100, abs % 100)
    }

    /// Multiply by a quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents.saturating_mul(factor))
    }

    /// Check if this is below zero.
    pub fn is_negative(&self) -> bool {
        self.amount_cents < 0
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Money::from_decimal(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.to_decimal()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_add(other.amount_cents))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount_cents.saturating_sub(other.amount_cents))
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(49.99).amount_cents, 4999);
        assert_eq!(Money::from_decimal(3.0).amount_cents, 300);
        assert_eq!(Money::from_decimal(0.1 + 0.2).amount_cents, 30);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999).display(), "$49.99");
        assert_eq!(Money::new(5).display(), "$0.05");
        assert_eq!(Money::new(-999).display(), "-$9.99");
        assert_eq!(Money::dollars(1000).display_amount(), "1000.00");
    }

    #[test]
    fn test_money_arithmetic() {
        let a = Money::new(1000);
        let b = Money::new(300);
        assert_eq!((a + b).amount_cents, 1300);
        assert_eq!((a - b).amount_cents, 700);
        assert_eq!((b * 3).amount_cents, 900);

        let total: Money = vec![a, b, b].into_iter().sum();
        assert_eq!(total.amount_cents, 1600);
    }

    #[test]
    fn test_money_saturates() {
        let huge = Money::from_decimal(1e17);
        assert_eq!(huge.amount_cents, i64::MAX);
        assert_eq!(huge * 1000, Money::new(i64::MAX));
        assert_eq!(huge + Money::new(1), Money::new(i64::MAX));
        assert_eq!(Money::new(i64::MIN) - Money::new(1), Money::new(i64::MIN));

        let mut total = Money::new(i64::MAX - 1);
        total += Money::dollars(5);
        assert_eq!(total.amount_cents, i64::MAX);

        let sum: Money = vec![huge, huge].into_iter().sum();
        assert_eq!(sum, Money::new(i64::MAX));
        assert!(Money::new(-1).is_negative());
    }

    #[test]
    fn test_money_serializes_as_decimal() {
        let json = serde_json::to_string(&Money::new(300)).unwrap();
        assert_eq!(json, "3.0");

        let back: Money = serde_json::from_str("2.5").unwrap();
        assert_eq!(back, Money::new(250));

        let from_int: Money = serde_json::from_str("1000").unwrap();
        assert_eq!(from_int, Money::dollars(1000));
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::new(100) < Money::new(200));
        assert_eq!(Money::new(100).max(Money::new(50)), Money::new(100));
    }
}
