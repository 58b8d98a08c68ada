//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In floating point:                                                 │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  A $9.99 plan billed 12 months at 20% off:                          │
//! │    9.99 × 12 × 0.8 = 95.90399999...  → Which cent do you charge?    │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Cents                                        │
//! │    999 × 12 = 11988, discount portion 2398 (rounded half-up),       │
//! │    price 9590. Every caller computes the exact same cent.           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use vendo_core::money::Money;
//! use vendo_core::types::Rate;
//!
//! let subtotal = Money::from_cents(11_988);
//! let portion = subtotal.rate_portion(Rate::from_bps(2_000)); // 20%
//! assert_eq!(portion.cents(), 2_398);
//! assert_eq!((subtotal - portion).cents(), 9_590);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::{Multiplier, Rate};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and corrections
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use vendo_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// For negative amounts, only the major unit should be negative:
    /// `from_major_minor(-5, 50)` is -$5.50, not -$4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (whole dollars), truncated toward zero.
    ///
    /// This is also the loyalty-point base: one point per whole dollar.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Returns the portion of this amount described by a [`Rate`].
    ///
    /// This is the single place fractional rates meet cents: sales tax,
    /// discount amounts, and subscription discounts all route through it.
    /// Rounding is half-up on the fractional cent, computed in i128 so large
    /// amounts cannot overflow.
    ///
    /// ```rust
    /// use vendo_core::money::Money;
    /// use vendo_core::types::Rate;
    ///
    /// // $100.00 at 7.25% = $7.25 exactly
    /// let amount = Money::from_cents(10_000);
    /// assert_eq!(amount.rate_portion(Rate::from_bps(725)).cents(), 725);
    /// ```
    pub fn rate_portion(&self, rate: Rate) -> Money {
        // rate.bps() is basis points: 725 = 7.25%
        // Formula: amount_cents * bps / 10000, +5000 rounds half-up
        let portion = (self.0 as i128 * rate.bps() as i128 + 5_000) / 10_000;
        Money::from_cents(portion as i64)
    }

    /// Returns this amount reduced by a fractional [`Rate`].
    ///
    /// ```rust
    /// use vendo_core::money::Money;
    /// use vendo_core::types::Rate;
    ///
    /// let subtotal = Money::from_cents(10_000); // $100.00
    /// let discounted = subtotal.discounted_by(Rate::from_bps(1_000)); // 10% off
    /// assert_eq!(discounted.cents(), 9_000);
    /// ```
    pub fn discounted_by(&self, rate: Rate) -> Money {
        *self - self.rate_portion(rate)
    }

    /// Scales this amount by a per-mille [`Multiplier`].
    ///
    /// Used for shipping zone multipliers, where the factor can exceed 1.0
    /// (e.g. ×3.0 for international destinations). Rounds half-up on the
    /// fractional cent.
    ///
    /// ```rust
    /// use vendo_core::money::Money;
    /// use vendo_core::types::Multiplier;
    ///
    /// let base = Money::from_cents(1_349);
    /// assert_eq!(base.scale(Multiplier::from_per_mille(3_000)).cents(), 4_047);
    /// ```
    pub fn scale(&self, factor: Multiplier) -> Money {
        let scaled = (self.0 as i128 * factor.per_mille() as i128 + 500) / 1_000;
        Money::from_cents(scaled as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// This is for debugging. Use frontend formatting for actual UI display
/// to handle localization properly.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
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

/// Multiplication by i64 (per-pound charges, months of a plan).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
