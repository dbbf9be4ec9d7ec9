//! # Money Module
//!
//! The `Money` type: monetary values as integer cents.
//!
//! ## Why Integer Money?
//! IEEE doubles produce totals like `6.959200000000001`. Integer cents make
//! every sum exact and push rounding into one explicit, pinned place (tax).
//!
//! ## Rounding Policy (pinned)
//! Tax is the only operation that rounds. It is computed in basis points:
//!
//! `tax_cents = (subtotal_cents × rate_bps + 5000) / 10000`
//!
//! i.e. round-half-up on the fractional cent, evaluated in i128 so large
//! subtotals cannot overflow. Example: subtotal 8699¢ at 800 bps gives
//! 695.92¢ which rounds to 696¢.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

use crate::types::TaxRate;

/// A monetary value in the smallest currency unit (cents for USD).
///
/// Signed so that arithmetic on refund-like deltas stays representable,
/// even though the engine itself only produces non-negative amounts.
///
/// ## Example
/// ```rust
/// use orchard_core::money::Money;
///
/// let price = Money::from_cents(350); // $3.50
/// let line = price * 2;
/// assert_eq!(line.cents(), 700);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies a unit price by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use orchard_core::money::Money;
    ///
    /// let unit = Money::from_cents(225); // $2.25
    /// assert_eq!(unit.multiply_quantity(3).cents(), 675);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Calculates tax on this amount at the given rate.
    ///
    /// Implements the pinned rounding policy (see module docs): integer
    /// math in i128, +5000 before the /10000 so half-cents round up.
    ///
    /// ## Example
    /// ```rust
    /// use orchard_core::money::Money;
    /// use orchard_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(8699); // $86.99
    /// let tax = subtotal.calculate_tax(TaxRate::from_bps(800)); // 8%
    /// assert_eq!(tax.cents(), 696); // $6.9592 → $6.96
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display. The UI formats currency itself (localization);
/// this is for logs and receipts in the demo binary.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
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
    fn from_cents_round_trip() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(format!("{}", Money::from_cents(350)), "$3.50");
        assert_eq!(format!("{}", Money::from_cents(9395)), "$93.95");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn tax_exact() {
        // $10.00 at 10% = $1.00, no rounding involved
        let tax = Money::from_cents(1000).calculate_tax(TaxRate::from_bps(1000));
        assert_eq!(tax.cents(), 100);
    }

    #[test]
    fn tax_rounds_half_up() {
        // $86.99 at 8% = $6.9592 → $6.96
        let tax = Money::from_cents(8699).calculate_tax(TaxRate::from_bps(800));
        assert_eq!(tax.cents(), 696);

        // $10.00 at 8.25% = $0.825 → $0.83
        let tax = Money::from_cents(1000).calculate_tax(TaxRate::from_bps(825));
        assert_eq!(tax.cents(), 83);
    }

    #[test]
    fn tax_large_amount_no_overflow() {
        // A subtotal near i64::MAX/10000 would overflow in i64; the i128
        // intermediate keeps it exact.
        let big = Money::from_cents(9_000_000_000_000_000);
        let tax = big.calculate_tax(TaxRate::from_bps(800));
        assert_eq!(tax.cents(), 720_000_000_000_000);
    }

    #[test]
    fn multiply_quantity_matches_mul() {
        let unit = Money::from_cents(299);
        assert_eq!(unit.multiply_quantity(3), unit * 3);
    }
}
