//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  The dashboard this core serves computed invoices in floating point:    │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $399.00 is 39900 cents. Tax, discounts, and totals are integer       │
//! │    arithmetic with explicit rounding at the cent.                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rolloff_core::money::Money;
//!
//! // Create from cents (preferred)
//! let rate = Money::from_cents(39900); // $399.00
//!
//! // Parse what the user typed into a rate field (lenient)
//! let typed = Money::parse_input("399.00");
//! assert_eq!(typed, rate);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

/// Parses a decimal string into hundredths of its unit.
///
/// This is the single lenient-coercion point for everything the invoice
/// form collects as free text: `"399.00"` → 39900 (dollars to cents),
/// `"8.25"` → 825 (percent to basis points).
///
/// ## Coercion Rules
/// - Surrounding whitespace and a leading `$` are tolerated
/// - Fraction digits beyond the second are truncated (form inputs are
///   cents-precision)
/// - Anything non-numeric, or a negative value, yields `None`
pub(crate) fn parse_decimal_hundredths(input: &str) -> Option<i64> {
    let trimmed = input.trim().trim_start_matches('$');
    if trimmed.is_empty() || trimmed.starts_with('-') {
        return None;
    }

    let (whole, fraction) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };

    // An input of ".5" has an empty whole part; treat it as 0.
    let whole_value: i64 = if whole.is_empty() {
        0
    } else {
        whole.parse().ok()?
    };

    // Keep at most two fraction digits, right-padded: "5" → 50, "075" → 07.
    let mut fraction_value: i64 = 0;
    let mut digits = 0;
    for c in fraction.chars() {
        if !c.is_ascii_digit() {
            return None;
        }
        if digits < 2 {
            fraction_value = fraction_value * 10 + (c as i64 - '0' as i64);
            digits += 1;
        }
    }
    if digits == 1 {
        fraction_value *= 10;
    }

    whole_value
        .checked_mul(100)
        .and_then(|w| w.checked_add(fraction_value))
}

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values — an over-subtotal discount
///   legitimately produces a negative taxable amount (credit memos)
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rolloff_core::money::Money;
    ///
    /// let rate = Money::from_cents(39900); // Represents $399.00
    /// assert_eq!(rate.cents(), 39900);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses a user-entered rate string into Money, leniently.
    ///
    /// Invoice form fields never block the user mid-edit: a value the
    /// user is still typing ("", "abc", "12.") and negative amounts both
    /// coerce to zero instead of erroring.
    ///
    /// ## Example
    /// ```rust
    /// use rolloff_core::money::Money;
    ///
    /// assert_eq!(Money::parse_input("399.00").cents(), 39900);
    /// assert_eq!(Money::parse_input("$1,000").cents(), 0); // commas not accepted
    /// assert_eq!(Money::parse_input("garbage").cents(), 0);
    /// assert_eq!(Money::parse_input("-50").cents(), 0);
    /// ```
    pub fn parse_input(input: &str) -> Self {
        Money(parse_decimal_hundredths(input).unwrap_or(0))
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
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

    /// Calculates tax on this amount, rounding half-up at the cent.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`. The +5000 rounds
    /// (5000/10000 = half a cent). i128 intermediate prevents overflow.
    ///
    /// ## Example
    /// ```rust
    /// use rolloff_core::money::Money;
    /// use rolloff_core::types::TaxRate;
    ///
    /// let haul = Money::from_cents(39900); // $399.00
    /// let rate = TaxRate::from_bps(825);   // 8.25%
    ///
    /// // $399.00 × 8.25% = $32.9175 → rounds to $32.92
    /// assert_eq!(haul.calculate_tax(rate).cents(), 3292);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Returns the given percentage (in basis points) of this amount,
    /// rounding half-up at the cent. Used for percentage discounts:
    /// 10% of $100.00 is `percentage_of(1000)` = $10.00.
    pub fn percentage_of(&self, bps: u32) -> Money {
        let part = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money::from_cents(part as i64)
    }

    /// Multiplies money by a quantity (unit rate × quantity = line amount).
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging and logs. The dashboard formats currency itself
/// to handle localization.
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

/// Multiplication by integer (for quantity calculations).
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(39900);
        assert_eq!(money.cents(), 39900);
        assert_eq!(money.dollars(), 399);
        assert_eq!(money.cents_part(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(39900)), "$399.00");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_parse_input_valid() {
        assert_eq!(Money::parse_input("399.00").cents(), 39900);
        assert_eq!(Money::parse_input("399").cents(), 39900);
        assert_eq!(Money::parse_input(" $75.5 ").cents(), 7550);
        assert_eq!(Money::parse_input(".5").cents(), 50);
        assert_eq!(Money::parse_input("0").cents(), 0);
    }

    #[test]
    fn test_parse_input_coerces_bad_input_to_zero() {
        // Mid-edit and garbage values must never block the user
        assert_eq!(Money::parse_input("").cents(), 0);
        assert_eq!(Money::parse_input("abc").cents(), 0);
        assert_eq!(Money::parse_input("12.x").cents(), 0);
        assert_eq!(Money::parse_input("-50").cents(), 0);
    }

    #[test]
    fn test_parse_input_truncates_extra_fraction_digits() {
        assert_eq!(Money::parse_input("399.005").cents(), 39900);
        assert_eq!(Money::parse_input("1.999").cents(), 199);
    }

    #[test]
    fn test_tax_calculation_basic() {
        // $10.00 at 10% = $1.00
        let amount = Money::from_cents(1000);
        let rate = TaxRate::from_bps(1000);
        assert_eq!(amount.calculate_tax(rate).cents(), 100);
    }

    #[test]
    fn test_tax_calculation_with_rounding() {
        // $399.00 at 8.25% = $32.9175 → $32.92
        let amount = Money::from_cents(39900);
        let rate = TaxRate::from_bps(825);
        assert_eq!(amount.calculate_tax(rate).cents(), 3292);
    }

    #[test]
    fn test_tax_on_negative_amount() {
        // Over-discounted invoices carry negative taxable amounts
        let amount = Money::from_cents(-10000);
        let rate = TaxRate::from_bps(825);
        assert_eq!(amount.calculate_tax(rate).cents(), -824);
    }

    #[test]
    fn test_percentage_of() {
        let subtotal = Money::from_cents(10000); // $100.00
        assert_eq!(subtotal.percentage_of(1000).cents(), 1000); // 10%
        assert_eq!(subtotal.percentage_of(10000).cents(), 10000); // 100%
        assert_eq!(subtotal.percentage_of(0).cents(), 0);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_rate = Money::from_cents(39900);
        assert_eq!(unit_rate.multiply_quantity(2).cents(), 79800);
    }
}
