//! # Totals Calculator
//!
//! The single place where subtotal/tax/total are derived from line items.
//!
//! ## Contract
//! `compute_totals(lines, tax_exempt, rate)` is pure and deterministic:
//! - `subtotal = Σ unit_price × quantity`, order-independent
//! - `tax = 0` when exempt, else `round(subtotal × rate)` per the pinned
//!   rounding policy in [`crate::money`]
//! - `total = subtotal + tax`
//! - empty input → all zeros, no error cases
//!
//! ## Recompute, Never Patch
//! Every mutation of an item list (checkout, split, edit) calls back into
//! this function over the full list. Totals are never adjusted
//! incrementally, so they cannot drift from the items they describe.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{OrderLine, TaxRate};

/// Derived money amounts for a set of line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderTotals {
    /// Sum of line totals, in cents.
    pub subtotal_cents: i64,

    /// Tax on the subtotal, in cents.
    pub tax_cents: i64,

    /// subtotal + tax, in cents.
    pub total_cents: i64,
}

/// Computes totals for a sequence of order lines.
///
/// ## Example
/// ```rust
/// use orchard_core::totals::compute_totals;
/// use orchard_core::types::{OrderLine, TaxRate};
///
/// let lines = vec![OrderLine {
///     product_id: "p1".to_string(),
///     sku: "BEV-001".to_string(),
///     name: "Espresso".to_string(),
///     unit_price_cents: 350,
///     quantity: 2,
/// }];
///
/// let totals = compute_totals(&lines, false, TaxRate::from_bps(800));
/// assert_eq!(totals.subtotal_cents, 700);
/// assert_eq!(totals.tax_cents, 56);
/// assert_eq!(totals.total_cents, 756);
/// ```
pub fn compute_totals(lines: &[OrderLine], tax_exempt: bool, rate: TaxRate) -> OrderTotals {
    let subtotal: i64 = lines.iter().map(OrderLine::line_total_cents).sum();

    let tax = if tax_exempt {
        Money::zero()
    } else {
        Money::from_cents(subtotal).calculate_tax(rate)
    };

    OrderTotals {
        subtotal_cents: subtotal,
        tax_cents: tax.cents(),
        total_cents: subtotal + tax.cents(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: &str, price_cents: i64, quantity: i64) -> OrderLine {
        OrderLine {
            product_id: id.to_string(),
            sku: format!("SKU-{}", id),
            name: format!("Product {}", id),
            unit_price_cents: price_cents,
            quantity,
        }
    }

    #[test]
    fn empty_input_is_all_zeros() {
        let totals = compute_totals(&[], false, TaxRate::from_bps(800));
        assert_eq!(totals, OrderTotals::default());
    }

    #[test]
    fn pinned_scenario() {
        // 2 × $3.50 + 1 × $79.99 at 8%, not exempt:
        // subtotal $86.99, tax $6.9592 → $6.96, total $93.95
        let lines = vec![line("p1", 350, 2), line("p5", 7999, 1)];
        let totals = compute_totals(&lines, false, TaxRate::from_bps(800));

        assert_eq!(totals.subtotal_cents, 8699);
        assert_eq!(totals.tax_cents, 696);
        assert_eq!(totals.total_cents, 9395);
    }

    #[test]
    fn tax_exempt_zeroes_tax() {
        let lines = vec![line("p1", 350, 2), line("p5", 7999, 1)];
        let totals = compute_totals(&lines, true, TaxRate::from_bps(800));

        assert_eq!(totals.subtotal_cents, 8699);
        assert_eq!(totals.tax_cents, 0);
        assert_eq!(totals.total_cents, 8699);
    }

    #[test]
    fn total_is_subtotal_plus_tax() {
        let lines = vec![line("a", 199, 3), line("b", 1250, 7), line("c", 1, 13)];
        for rate in [0u32, 500, 800, 825, 2500] {
            let totals = compute_totals(&lines, false, TaxRate::from_bps(rate));
            assert_eq!(totals.total_cents, totals.subtotal_cents + totals.tax_cents);
        }
    }

    #[test]
    fn subtotal_is_order_independent() {
        let forward = vec![line("a", 199, 3), line("b", 1250, 7)];
        let backward = vec![line("b", 1250, 7), line("a", 199, 3)];

        assert_eq!(
            compute_totals(&forward, false, TaxRate::from_bps(800)),
            compute_totals(&backward, false, TaxRate::from_bps(800)),
        );
    }

    #[test]
    fn zero_rate_means_zero_tax() {
        let lines = vec![line("a", 999, 2)];
        let totals = compute_totals(&lines, false, TaxRate::zero());
        assert_eq!(totals.tax_cents, 0);
        assert_eq!(totals.total_cents, totals.subtotal_cents);
    }
}
