//! # Money Module
//!
//! Provides the `Money` type used for every charge, cost and revenue figure.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing a season of stays in floats drifts:                           │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌                                  │
//! │                                                                         │
//! │  A 20% discount on €160.00 must be exactly €32.00, and the revenue    │
//! │  report must add up to the cent across hundreds of stays.             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    16000 cents × 20% = 3200 cents, no drift, ever                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Percentages only become floats at the very end, for the margin figure that
//! is displayed and never summed ([`Money::percent_of`]).
//!
//! ## Usage
//! ```rust
//! use albergo_core::money::Money;
//!
//! let nightly = Money::from_euros(80);
//! let stay = nightly * 2i64;
//! assert_eq!(stay.cents(), 16000);
//! assert_eq!(stay.to_string(), "€160.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::discount::DiscountRate;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in euro cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: net revenue goes negative when operating costs
///   exceed income, so the type must carry a sign
/// - **Single field tuple struct**: zero-cost wrapper over i64
/// - **Serialized as the raw cent count**: collaborators never see floats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ```rust
    /// use albergo_core::money::Money;
    ///
    /// let price = Money::from_cents(1250); // €12.50
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole euros.
    ///
    /// Room rates and service prices are whole euros in practice, so this is
    /// the constructor the inventory defaults use.
    #[inline]
    pub const fn from_euros(euros: i64) -> Self {
        Money(euros * 100)
    }

    /// Creates a Money value from euros and cents.
    ///
    /// ## Note
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -€5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-euro portion.
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero euros.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by a count of nights or days. Saturates at the `i64`
    /// bounds instead of wrapping.
    ///
    /// ```rust
    /// use albergo_core::money::Money;
    ///
    /// let breakfast = Money::from_euros(15);
    /// assert_eq!(breakfast.times(3).cents(), 4500);
    /// ```
    #[inline]
    pub const fn times(&self, count: i64) -> Self {
        Money(self.0.saturating_mul(count))
    }

    /// Returns the share of this amount given by `rate`, rounded half-up to
    /// the cent.
    ///
    /// ## Implementation
    /// Integer math on basis points: `(amount * bps + 5000) / 10000`.
    /// The +5000 provides rounding (5000/10000 = 0.5).
    ///
    /// ```rust
    /// use albergo_core::discount::DiscountRate;
    /// use albergo_core::money::Money;
    ///
    /// let total = Money::from_euros(160);
    /// let share = total.portion(DiscountRate::from_percentage(20.0));
    /// assert_eq!(share.cents(), 3200);
    /// ```
    pub fn portion(&self, rate: DiscountRate) -> Money {
        // i128 so that large seasonal totals cannot overflow mid-multiplication
        let cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(cents as i64)
    }

    /// Applies a percentage discount and returns what is left to pay.
    pub fn apply_discount(&self, rate: DiscountRate) -> Money {
        *self - self.portion(rate)
    }

    /// Expresses this amount as a percentage of `whole`.
    ///
    /// Returns `0.0` when `whole` is not positive, so a period without any
    /// income reports a zero margin instead of dividing by zero.
    pub fn percent_of(&self, whole: Money) -> f64 {
        if !whole.is_positive() {
            return 0.0;
        }
        self.0 as f64 / whole.0 as f64 * 100.0
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `€160.00` (debugging and log output; the front desk has its
/// own currency formatting).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}€{}.{:02}", sign, self.euros().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, count: i64) -> Self {
        self.times(count)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents_and_parts() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.euros(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_euros(160).to_string(), "€160.00");
        assert_eq!(Money::from_cents(505).to_string(), "€5.05");
        assert_eq!(Money::from_cents(-550).to_string(), "-€5.50");
        assert_eq!(Money::zero().to_string(), "€0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_euros(10);
        let b = Money::from_euros(5);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3i64).cents(), 3000);
        assert_eq!(a.times(4).cents(), 4000);

        let total: Money = [a, b, b].iter().sum();
        assert_eq!(total, Money::from_euros(20));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_cents(i64::MAX / 2);

        assert_eq!(huge.times(3).cents(), i64::MAX);
        assert_eq!((huge * -3i64).cents(), i64::MIN);
        assert_eq!((huge + huge + huge).cents(), i64::MAX);
        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);

        let total: Money = [huge, huge, huge].iter().sum();
        assert!(total.is_positive());
    }

    #[test]
    fn test_portion_rounds_half_up() {
        // €0.05 × 10% = 0.5 cents → 1 cent
        let amount = Money::from_cents(5);
        assert_eq!(amount.portion(DiscountRate::from_bps(1000)).cents(), 1);
    }

    #[test]
    fn test_apply_discount() {
        let total = Money::from_euros(160);
        let paid = total.apply_discount(DiscountRate::from_percentage(20.0));
        assert_eq!(paid, Money::from_euros(128));
    }

    #[test]
    fn test_percent_of_guards_zero() {
        assert_eq!(Money::from_euros(10).percent_of(Money::zero()), 0.0);
        assert_eq!(Money::from_euros(-10).percent_of(Money::zero()), 0.0);

        let margin = Money::from_euros(50).percent_of(Money::from_euros(200));
        assert!((margin - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_sign_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(1).is_positive());
        assert!(Money::from_cents(-1).is_negative());
    }
}
