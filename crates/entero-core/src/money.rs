//! # Money Module
//!
//! Provides the `Money` type for handling rupee amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The catalog lists prices such as ₹131.94. In floating point:          │
//! │    131.94 * 3 = 395.82000000000005                                     │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise (1 rupee = 100 paise)                     │
//! │    13194 paise * 3 = 39582 paise = ₹395.82, exactly                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use entero_core::money::Money;
//!
//! let price = Money::from_rupees(599);          // ₹599.00
//! let line = price * 2;                         // ₹1198.00
//! let with_fee = line + Money::from_rupees(79); // ₹1277.00
//! assert_eq!(with_fee.paise(), 127_700);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::error::ValidationError;

/// Currency symbol used when rendering amounts.
pub const RUPEE_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in paise (the smallest rupee unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: savings can go negative if a catalog record lists an
///   original price below its selling price
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - Serializes as a plain integer of paise
///
/// ## Where Money Flows
/// ```text
/// ProductRecord.price ──► CartLineItem.price ──► line total ──► BillSummary
///                                                                 │
///                                  "₹599.00" on the cart screen ◄─┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise.
    ///
    /// ## Example
    /// ```rust
    /// use entero_core::money::Money;
    ///
    /// let price = Money::from_paise(13194); // ₹131.94
    /// assert_eq!(price.paise(), 13194);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Creates a Money value from rupees and paise.
    ///
    /// ## Example
    /// ```rust
    /// use entero_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(131, 94).paise(), 13194);
    /// assert_eq!(Money::from_major_minor(-5, 50).paise(), -550);
    /// ```
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a rupee amount written with up to two decimals ("77", "131.94").
    ///
    /// Used for amounts coming from config files and environment variables.
    /// Negative amounts are rejected.
    ///
    /// ## Example
    /// ```rust
    /// use entero_core::money::Money;
    ///
    /// assert_eq!(Money::parse_rupees("131.94").unwrap().paise(), 13194);
    /// assert_eq!(Money::parse_rupees("77").unwrap().paise(), 7700);
    /// assert!(Money::parse_rupees("12.345").is_err());
    /// ```
    pub fn parse_rupees(input: &str) -> Result<Money, ValidationError> {
        let text = input.trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "amount".to_string(),
            reason: format!("'{}' is not a rupee amount with up to two decimals", text),
        };

        if text.starts_with('-') {
            return Err(ValidationError::OutOfRange {
                field: "amount".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }

        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));
        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) || fraction.len() > 2 {
            return Err(invalid());
        }

        let rupees: i64 = whole.parse().map_err(|_| invalid())?;
        let paise: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => fraction.parse().map_err(|_| invalid())?,
        };

        rupees
            .checked_mul(100)
            .and_then(|p| p.checked_add(paise))
            .map(Money)
            .ok_or_else(invalid)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
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

    /// Multiplies a unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use entero_core::money::Money;
    ///
    /// let unit_price = Money::from_rupees(50);
    /// assert_eq!(unit_price.multiply_quantity(3).paise(), 15_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Checked multiplication by quantity. Returns `None` on overflow.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(paise) => Some(Money(paise)),
            None => None,
        }
    }

    /// Checked addition. Returns `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(paise) => Some(Money(paise)),
            None => None,
        }
    }

    /// Addition clamped at the `i64` bounds.
    #[inline]
    pub const fn saturating_add(&self, other: Money) -> Self {
        Money(self.0.saturating_add(other.0))
    }

    /// Returns `self - other`, floored at zero.
    ///
    /// Used for "add ₹X more for free delivery" style figures.
    #[inline]
    pub const fn saturating_remaining(&self, other: Money) -> Self {
        let diff = self.0 - other.0;
        if diff > 0 {
            Money(diff)
        } else {
            Money(0)
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders `₹599.00`, `-₹5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{:02}",
            sign,
            RUPEE_SYMBOL,
            self.rupees().abs(),
            self.paise_part()
        )
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

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
