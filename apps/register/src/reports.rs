//! # Sales Reports
//!
//! Read-only projections for the dashboard view. Canceled orders are
//! excluded from revenue figures but counted separately so the dashboard
//! can show void activity.

use serde::{Deserialize, Serialize};

use orchard_core::CompletedOrder;

/// Aggregate sales figures over the order ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesReport {
    /// Revenue across non-canceled orders, in cents.
    pub gross_sales_cents: i64,

    /// Number of non-canceled orders.
    pub order_count: usize,

    /// gross / count, 0 when there are no orders.
    pub average_order_cents: i64,

    /// Total units across non-canceled orders.
    pub items_sold: i64,

    /// Number of canceled orders in the ledger.
    pub canceled_count: usize,
}

/// Computes the dashboard figures from the ledger.
pub fn sales_report(orders: &[CompletedOrder]) -> SalesReport {
    let (active, canceled): (Vec<_>, Vec<_>) = orders.iter().partition(|o| !o.is_canceled());

    let gross: i64 = active.iter().map(|o| o.total_cents).sum();
    let items: i64 = active.iter().map(|o| o.total_quantity()).sum();
    let count = active.len();

    SalesReport {
        gross_sales_cents: gross,
        order_count: count,
        average_order_cents: if count > 0 { gross / count as i64 } else { 0 },
        items_sold: items,
        canceled_count: canceled.len(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use orchard_core::TaxRate;

    #[test]
    fn empty_ledger_is_all_zeros() {
        assert_eq!(sales_report(&[]), SalesReport::default());
    }

    #[test]
    fn canceled_orders_leave_revenue() {
        let mut register = seed::demo_register();
        let rate = TaxRate::from_bps(800);

        for (product_id, qty) in [("p1", 2_i64), ("p3", 1)] {
            let product = register.catalog.product(product_id).unwrap().clone();
            register.cart.add_product(&product);
            register.cart.update_quantity(product_id, qty);
            let (catalog, cart, ledger) = (
                &mut register.catalog,
                &mut register.cart,
                &mut register.ledger,
            );
            ledger.checkout(cart, catalog, "cash", rate).unwrap();
        }

        let before = sales_report(register.ledger.orders());
        assert_eq!(before.order_count, 2);
        assert_eq!(before.items_sold, 3);
        assert_eq!(before.canceled_count, 0);

        // void the most recent order; its revenue and items drop out
        let latest = register.ledger.orders()[0].id.clone();
        let (catalog, ledger) = (&mut register.catalog, &mut register.ledger);
        ledger.cancel(&latest, catalog);

        let after = sales_report(register.ledger.orders());
        assert_eq!(after.order_count, 1);
        assert_eq!(after.canceled_count, 1);
        assert!(after.gross_sales_cents < before.gross_sales_cents);
        assert_eq!(after.average_order_cents, after.gross_sales_cents);
    }
}
