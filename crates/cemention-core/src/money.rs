//! # Money Module
//!
//! Provides the `Money` type for rupee amounts.
//!
//! ## Why Exact Decimals?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    300 × 1.0167 = 305.01000000000005  ❌                                │
//! │                                                                         │
//! │  Role prices are NOT rounded when they are frozen into a cart line,     │
//! │  so integer paise cannot hold them either:                              │
//! │    ₹300.00 × 1.0167 = ₹305.010  (fine)                                  │
//! │    ₹312.50 × 1.0167 = ₹317.71875 (fractional paise)                     │
//! │                                                                         │
//! │  Solution: rust_decimal. Every multiplication by a basis-point rate is  │
//! │  exact, and rounding to 2 places happens only in Display.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use cemention_core::money::Money;
//! use cemention_core::types::Rate;
//!
//! let base = Money::from_rupees(1000);
//! let retail = base.marked_up(Rate::from_bps(167));
//! assert_eq!(retail, Money::from_paise(101_670));
//! assert_eq!(retail.to_string(), "₹1016.70");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::Rate;

// =============================================================================
// Money Type
// =============================================================================

/// A rupee amount with exact decimal precision.
///
/// ## Design Decisions
/// - **Decimal, not f64**: role multipliers and GST must not drift
/// - **Unrounded**: arithmetic keeps every digit; `Display` rounds to paise
/// - **JSON as number**: the storefront backend stores prices as floats,
///   so serde reads and writes plain JSON numbers
///
/// ## Where Money Flows
/// ```text
/// Product.basePrice ──► role_price() ──► CartLine.price ──► line_total()
///                                                              │
///        OrderTotal { subtotal, gst, cardSurcharge, total } ◄──┘
///                                │
///                                └──► Order.totalAmount (sent to backend)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Money {
    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use cemention_core::money::Money;
    ///
    /// let price = Money::from_rupees(300);
    /// assert_eq!(price.to_string(), "₹300.00");
    /// ```
    #[inline]
    pub fn from_rupees(rupees: i64) -> Self {
        Money(Decimal::from(rupees))
    }

    /// Creates a Money value from paise (1/100 rupee).
    ///
    /// ## Example
    /// ```rust
    /// use cemention_core::money::Money;
    ///
    /// let price = Money::from_paise(30_050);
    /// assert_eq!(price.to_string(), "₹300.50");
    /// ```
    #[inline]
    pub fn from_paise(paise: i64) -> Self {
        Money(Decimal::new(paise, 2))
    }

    /// Wraps an existing decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Returns the exact (unrounded) amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Rounds to whole paise using banker's rounding.
    ///
    /// Only used for presentation; totals are computed unrounded.
    pub fn rounded(&self) -> Self {
        Money(self.0.round_dp(2))
    }

    /// Returns `rate` of this amount (e.g. 18% GST on a subtotal).
    ///
    /// ## Example
    /// ```rust
    /// use cemention_core::money::Money;
    /// use cemention_core::types::Rate;
    ///
    /// let subtotal = Money::from_rupees(30_000);
    /// let gst = subtotal.apply_rate(Rate::from_bps(1800));
    /// assert_eq!(gst, Money::from_rupees(5_400));
    /// ```
    pub fn apply_rate(&self, rate: Rate) -> Money {
        Money(self.0 * rate.as_fraction())
    }

    /// Returns this amount increased by `rate` (e.g. a 1.67% role markup).
    ///
    /// ## Example
    /// ```rust
    /// use cemention_core::money::Money;
    /// use cemention_core::types::Rate;
    ///
    /// let base = Money::from_rupees(1000);
    /// assert_eq!(base.marked_up(Rate::from_bps(250)), Money::from_rupees(1025));
    /// ```
    pub fn marked_up(&self, rate: Rate) -> Money {
        if rate.is_zero() {
            return *self;
        }
        Money(self.0 * (Decimal::ONE + rate.as_fraction()))
    }

    /// Multiplies money by a quantity (bags).
    ///
    /// ## Example
    /// ```rust
    /// use cemention_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(300);
    /// assert_eq!(unit_price.multiply_quantity(100), Money::from_rupees(30_000));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows the amount rounded to paise with a rupee sign.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(f, "{}₹{:.2}", sign, self.0.abs().round_dp(2))
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by a bag count.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
