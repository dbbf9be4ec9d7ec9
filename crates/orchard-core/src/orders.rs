//! # Order Lifecycle Manager
//!
//! Owns the collection of completed orders and every transition on it.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Order Lifecycle                              │
//! │                                                                     │
//! │   Cart ──checkout──► Completed ──cancel──► Canceled                 │
//! │                         │    │                │                     │
//! │                         │    └──split──► Completed (new order)      │
//! │                         │                + reduced original         │
//! │                         │                                           │
//! │                      edit = cancel + reload into cart               │
//! │                                                                     │
//! │   delete: removes the record at any status (not a status itself)    │
//! │                                                                     │
//! │   STOCK:  checkout  -quantity   per line   (exactly once)           │
//! │           cancel    +quantity   per line   (exactly once)           │
//! │           split/delete/transfer: no stock movement                  │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Stale order ids are no-ops (`false`/`None`), never errors; quantities
//! are clamped, never rejected. The only `Err` out of this module is
//! checkout on an empty cart. This keeps every operation total for a
//! single-user UI that may hold stale references across modals.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cart::{Cart, CartLine};
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::totals::compute_totals;
use crate::types::{CompletedOrder, Customer, OrderLine, OrderStatus, SplitSelection, TaxRate};

/// The completed-order collection, most-recent-first.
///
/// Most-recent-first ordering is an external contract: the history UI
/// renders the vector as-is, and both checkout and split push new orders
/// to the front.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderLedger {
    orders: Vec<CompletedOrder>,
}

impl OrderLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        OrderLedger::default()
    }

    /// Rebuilds a ledger from persisted orders (most-recent-first).
    pub fn from_orders(orders: Vec<CompletedOrder>) -> Self {
        OrderLedger { orders }
    }

    /// All orders, most recent first.
    pub fn orders(&self) -> &[CompletedOrder] {
        &self.orders
    }

    /// Looks up an order by id.
    pub fn get(&self, order_id: &str) -> Option<&CompletedOrder> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Number of orders in the ledger (canceled included).
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Checks if the ledger is empty.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Commits the cart into a new completed order.
    ///
    /// ## What This Does
    /// 1. Refuses an empty cart with [`CoreError::EmptyCart`]
    /// 2. Freezes the cart lines and customer into a new order with a fresh
    ///    UUID, receipt number, and timestamp
    /// 3. Computes totals through the Totals Calculator (tax-exempt honored)
    /// 4. Decrements stock by each line's quantity - the quantities were
    ///    already clamped to stock by the Cart Engine
    /// 5. Pushes the order to the front of the ledger and clears the cart
    pub fn checkout(
        &mut self,
        cart: &mut Cart,
        catalog: &mut Catalog,
        payment_method: &str,
        rate: TaxRate,
    ) -> CoreResult<CompletedOrder> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let lines = cart.to_order_lines();
        let totals = compute_totals(&lines, cart.tax_exempt(), rate);

        let order = CompletedOrder {
            id: Uuid::new_v4().to_string(),
            receipt_number: generate_receipt_number(),
            lines,
            customer: cart.customer.clone(),
            subtotal_cents: totals.subtotal_cents,
            tax_cents: totals.tax_cents,
            total_cents: totals.total_cents,
            payment_method: payment_method.to_string(),
            created_at: Utc::now(),
            status: OrderStatus::Completed,
        };

        for line in &order.lines {
            catalog.adjust_stock(&line.product_id, -line.quantity);
        }

        self.orders.insert(0, order.clone());
        cart.clear();

        Ok(order)
    }

    // =========================================================================
    // Cancel / Void
    // =========================================================================

    /// Voids an order, restoring its stock effect.
    ///
    /// Idempotent: a stale id or an already-canceled order returns false
    /// and restores nothing, so stock can never be returned twice for the
    /// same order. The record stays in the ledger.
    pub fn cancel(&mut self, order_id: &str, catalog: &mut Catalog) -> bool {
        let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) else {
            return false;
        };
        if order.is_canceled() {
            return false;
        }

        order.status = OrderStatus::Canceled;
        for line in &order.lines {
            catalog.adjust_stock(&line.product_id, line.quantity);
        }

        true
    }

    // =========================================================================
    // Delete
    // =========================================================================

    /// Permanently removes an order record.
    ///
    /// Stock is untouched: its effects were already applied at checkout and
    /// possibly reversed at cancel. A stale id returns false and leaves the
    /// ledger unchanged.
    pub fn delete(&mut self, order_id: &str) -> bool {
        let before = self.orders.len();
        self.orders.retain(|o| o.id != order_id);
        self.orders.len() != before
    }

    // =========================================================================
    // Edit
    // =========================================================================

    /// Reopens an order for editing: cancel (restoring stock) composed with
    /// reloading the order's lines and customer into the live cart.
    ///
    /// History is never mutated in place - the reloaded cart produces a
    /// fresh order on its next checkout. The cancel half is idempotent, so
    /// editing an already-canceled order just reloads the cart.
    ///
    /// Reloaded lines take their clamp ceiling from live stock after the
    /// restoration (raised to the line quantity so the reload itself is
    /// never clamped); a product since deleted from the catalog keeps its
    /// own quantity as the ceiling.
    pub fn edit(&mut self, order_id: &str, cart: &mut Cart, catalog: &mut Catalog) -> bool {
        let Some((lines, customer)) = self
            .get(order_id)
            .map(|o| (o.lines.clone(), o.customer.clone()))
        else {
            return false;
        };

        self.cancel(order_id, catalog);

        let now = Utc::now();
        let cart_lines = lines
            .into_iter()
            .map(|line| {
                let ceiling = catalog
                    .product(&line.product_id)
                    .map(|p| p.stock.max(line.quantity))
                    .unwrap_or(line.quantity);
                CartLine {
                    product_id: line.product_id,
                    sku: line.sku,
                    name: line.name,
                    unit_price_cents: line.unit_price_cents,
                    stock_ceiling: ceiling,
                    quantity: line.quantity,
                    added_at: now,
                }
            })
            .collect();

        cart.load(cart_lines, customer);
        true
    }

    // =========================================================================
    // Transfer Customer
    // =========================================================================

    /// Replaces an order's frozen customer copy in place.
    ///
    /// Items, totals, and stock are untouched. A stale id returns false.
    pub fn transfer_customer(&mut self, order_id: &str, customer: Customer) -> bool {
        match self.orders.iter_mut().find(|o| o.id == order_id) {
            Some(order) => {
                order.customer = Some(customer);
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // Split
    // =========================================================================

    /// Partitions an order's lines into the original and a new order.
    ///
    /// ## Behavior
    /// - empty selections, a stale id, or a canceled order: `None` (a
    ///   canceled order is terminal; splitting it would mint a Completed
    ///   order whose goods were already returned to stock)
    /// - each selection clamps to `0 < quantity ≤ line quantity`; unknown
    ///   product ids are ignored; nothing surviving the clamp: `None`
    /// - otherwise the new order gets a fresh UUID, receipt number, and
    ///   timestamp, the same customer and payment method, and totals
    ///   recomputed over just its lines; the original's lines shrink
    ///   (zeroed lines dropped) and its totals are recomputed over what
    ///   remains; the new order is pushed to the front
    /// - no stock movement: the goods were sold once at original checkout,
    ///   splitting only reallocates bookkeeping
    ///
    /// An original whose every line is fully selected is retained with an
    /// empty line list and zero totals rather than deleted.
    pub fn split(
        &mut self,
        order_id: &str,
        selections: &[SplitSelection],
        rate: TaxRate,
    ) -> Option<CompletedOrder> {
        if selections.is_empty() {
            return None;
        }

        let idx = self.orders.iter().position(|o| o.id == order_id)?;
        if self.orders[idx].is_canceled() {
            return None;
        }

        // Clamp the selection against the order, iterating the order's own
        // lines so the split preserves insertion order. Duplicate selections
        // for one product are summed before the clamp.
        let mut split_lines: Vec<OrderLine> = Vec::new();
        let mut remaining_lines: Vec<OrderLine> = Vec::new();
        for line in &self.orders[idx].lines {
            let wanted: i64 = selections
                .iter()
                .filter(|s| s.product_id == line.product_id && s.quantity > 0)
                .map(|s| s.quantity)
                .sum();
            let take = wanted.min(line.quantity);

            if take > 0 {
                split_lines.push(OrderLine {
                    quantity: take,
                    ..line.clone()
                });
            }
            if line.quantity - take > 0 {
                remaining_lines.push(OrderLine {
                    quantity: line.quantity - take,
                    ..line.clone()
                });
            }
        }

        if split_lines.is_empty() {
            return None;
        }

        let original = &self.orders[idx];
        let tax_exempt = original
            .customer
            .as_ref()
            .map(|c| c.tax_exempt)
            .unwrap_or(false);

        let split_totals = compute_totals(&split_lines, tax_exempt, rate);
        let split_order = CompletedOrder {
            id: Uuid::new_v4().to_string(),
            receipt_number: generate_receipt_number(),
            lines: split_lines,
            customer: original.customer.clone(),
            subtotal_cents: split_totals.subtotal_cents,
            tax_cents: split_totals.tax_cents,
            total_cents: split_totals.total_cents,
            payment_method: original.payment_method.clone(),
            created_at: Utc::now(),
            status: OrderStatus::Completed,
        };

        let remaining_totals = compute_totals(&remaining_lines, tax_exempt, rate);
        let original = &mut self.orders[idx];
        original.lines = remaining_lines;
        original.subtotal_cents = remaining_totals.subtotal_cents;
        original.tax_cents = remaining_totals.tax_cents;
        original.total_cents = remaining_totals.total_cents;

        self.orders.insert(0, split_order.clone());
        Some(split_order)
    }
}

/// Generates a human-readable receipt number: `YYYYMMDD-HHMMSS-NNNN`.
///
/// Display only. Order identity is the UUID; the numeric suffix comes from
/// a fresh UUID rather than the clock so rapid successive checkouts within
/// one second still read differently.
fn generate_receipt_number() -> String {
    let now = Utc::now();
    let suffix = (Uuid::new_v4().as_u128() % 10000) as u16;
    format!("{}-{:04}", now.format("%Y%m%d-%H%M%S"), suffix)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn product(id: &str, price_cents: i64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            category_id: "snacks".to_string(),
            sku: format!("SKU-{}", id),
            price_cents,
            stock,
            image_url: String::new(),
            unit_label: "each".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn customer(id: &str, tax_exempt: bool) -> Customer {
        Customer {
            id: id.to_string(),
            name: format!("Customer {}", id),
            email: format!("{}@example.com", id),
            loyalty_points: 0,
            tax_exempt,
        }
    }

    fn rate() -> TaxRate {
        TaxRate::from_bps(800)
    }

    /// Catalog with the two pinned-scenario products plus a mid-stock one.
    fn catalog() -> Catalog {
        let mut c = Catalog::new();
        c.upsert_product(product("p1", 350, 100));
        c.upsert_product(product("p5", 7999, 30));
        c.upsert_product(product("p9", 200, 10));
        c
    }

    fn cart_with(catalog: &Catalog, picks: &[(&str, i64)]) -> Cart {
        let mut cart = Cart::new();
        for (id, qty) in picks {
            let p = catalog.product(id).unwrap().clone();
            cart.add_product(&p);
            cart.update_quantity(id, *qty);
        }
        cart
    }

    #[test]
    fn checkout_pinned_scenario() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 2), ("p5", 1)]);
        let mut ledger = OrderLedger::new();

        let order = ledger.checkout(&mut cart, &mut catalog, "card", rate()).unwrap();

        assert_eq!(order.subtotal_cents, 8699);
        assert_eq!(order.tax_cents, 696);
        assert_eq!(order.total_cents, 9395);
        assert_eq!(order.status, OrderStatus::Completed);
        assert!(cart.is_empty());

        // stock decremented per line
        assert_eq!(catalog.product("p1").unwrap().stock, 98);
        assert_eq!(catalog.product("p5").unwrap().stock, 29);
    }

    #[test]
    fn checkout_empty_cart_is_refused() {
        let mut catalog = catalog();
        let mut cart = Cart::new();
        let mut ledger = OrderLedger::new();

        let err = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart));
        assert!(ledger.is_empty());
    }

    #[test]
    fn checkout_honors_tax_exemption() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 2)]);
        cart.set_customer(customer("c9", true));
        let mut ledger = OrderLedger::new();

        let order = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();
        assert_eq!(order.tax_cents, 0);
        assert_eq!(order.total_cents, order.subtotal_cents);
    }

    #[test]
    fn checkout_orders_are_most_recent_first() {
        let mut catalog = catalog();
        let mut ledger = OrderLedger::new();

        let mut cart = cart_with(&catalog, &[("p1", 1)]);
        let first = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();
        let mut cart = cart_with(&catalog, &[("p9", 1)]);
        let second = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();

        assert_eq!(ledger.orders()[0].id, second.id);
        assert_eq!(ledger.orders()[1].id, first.id);
    }

    #[test]
    fn checkout_ids_are_unique_under_rapid_calls() {
        let mut catalog = catalog();
        let mut ledger = OrderLedger::new();
        let mut ids = std::collections::HashSet::new();

        for _ in 0..50 {
            let mut cart = cart_with(&catalog, &[("p1", 1)]);
            let order = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();
            assert!(ids.insert(order.id));
        }
    }

    #[test]
    fn cancel_restores_stock_exactly_once() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p9", 5)]);
        let mut ledger = OrderLedger::new();

        // checkout qty 5 of stock 10 → stock 5
        let order = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();
        assert_eq!(catalog.product("p9").unwrap().stock, 5);

        // cancel → back to 10
        assert!(ledger.cancel(&order.id, &mut catalog));
        assert_eq!(catalog.product("p9").unwrap().stock, 10);
        assert!(ledger.get(&order.id).unwrap().is_canceled());

        // second cancel is a no-op: stock stays 10
        assert!(!ledger.cancel(&order.id, &mut catalog));
        assert_eq!(catalog.product("p9").unwrap().stock, 10);
    }

    #[test]
    fn cancel_stale_id_is_noop() {
        let mut catalog = catalog();
        let mut ledger = OrderLedger::new();
        assert!(!ledger.cancel("missing", &mut catalog));
    }

    #[test]
    fn cancel_keeps_the_record() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 1)]);
        let mut ledger = OrderLedger::new();

        let order = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();
        ledger.cancel(&order.id, &mut catalog);

        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn delete_removes_record_without_touching_stock() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p9", 4)]);
        let mut ledger = OrderLedger::new();

        let order = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();
        assert_eq!(catalog.product("p9").unwrap().stock, 6);

        assert!(ledger.delete(&order.id));
        assert!(ledger.is_empty());
        // deletion is bookkeeping only; the sale's stock effect stands
        assert_eq!(catalog.product("p9").unwrap().stock, 6);
    }

    #[test]
    fn delete_stale_id_leaves_ledger_unchanged() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 1)]);
        let mut ledger = OrderLedger::new();
        ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();

        assert!(!ledger.delete("missing"));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn edit_cancels_and_reloads_cart() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p9", 5)]);
        cart.set_customer(customer("c1", false));
        let mut ledger = OrderLedger::new();

        let order = ledger.checkout(&mut cart, &mut catalog, "card", rate()).unwrap();
        assert_eq!(catalog.product("p9").unwrap().stock, 5);

        assert!(ledger.edit(&order.id, &mut cart, &mut catalog));

        // original canceled, stock restored, cart holds the lines again
        assert!(ledger.get(&order.id).unwrap().is_canceled());
        assert_eq!(catalog.product("p9").unwrap().stock, 10);
        assert_eq!(cart.total_quantity(), 5);
        assert_eq!(cart.customer.as_ref().unwrap().id, "c1");

        // re-checkout produces a fresh order; history untouched in place
        let reorder = ledger.checkout(&mut cart, &mut catalog, "card", rate()).unwrap();
        assert_ne!(reorder.id, order.id);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn edit_reload_ceiling_uses_live_stock() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p9", 5)]);
        let mut ledger = OrderLedger::new();
        let order = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();

        ledger.edit(&order.id, &mut cart, &mut catalog);

        // post-restore stock is 10; quantity can be raised up to it
        cart.update_quantity("p9", 99);
        assert_eq!(cart.total_quantity(), 10);
    }

    #[test]
    fn edit_survives_deleted_product() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p9", 3)]);
        let mut ledger = OrderLedger::new();
        let order = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();

        catalog.remove_product("p9");
        assert!(ledger.edit(&order.id, &mut cart, &mut catalog));

        // line reloads with its own quantity as the ceiling
        assert_eq!(cart.total_quantity(), 3);
        cart.update_quantity("p9", 99);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn edit_stale_id_is_noop() {
        let mut catalog = catalog();
        let mut cart = Cart::new();
        let mut ledger = OrderLedger::new();

        assert!(!ledger.edit("missing", &mut cart, &mut catalog));
        assert!(cart.is_empty());
    }

    #[test]
    fn transfer_customer_swaps_reference_only() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 2)]);
        cart.set_customer(customer("c1", false));
        let mut ledger = OrderLedger::new();

        let order = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();
        let stock_before = catalog.product("p1").unwrap().stock;

        assert!(ledger.transfer_customer(&order.id, customer("c2", false)));

        let after = ledger.get(&order.id).unwrap();
        assert_eq!(after.customer.as_ref().unwrap().id, "c2");
        assert_eq!(after.total_cents, order.total_cents);
        assert_eq!(catalog.product("p1").unwrap().stock, stock_before);

        assert!(!ledger.transfer_customer("missing", customer("c3", false)));
    }

    #[test]
    fn split_conserves_quantities_and_totals() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 3), ("p5", 2)]);
        let mut ledger = OrderLedger::new();
        let original = ledger.checkout(&mut cart, &mut catalog, "card", rate()).unwrap();
        let stock_p1 = catalog.product("p1").unwrap().stock;

        let split = ledger
            .split(
                &original.id,
                &[SplitSelection {
                    product_id: "p1".to_string(),
                    quantity: 1,
                }],
                rate(),
            )
            .unwrap();

        let reduced = ledger.get(&original.id).unwrap();

        // per-product conservation
        assert_eq!(reduced.quantity_of("p1") + split.quantity_of("p1"), 3);
        assert_eq!(reduced.quantity_of("p5") + split.quantity_of("p5"), 2);

        // totals conservation, integer-exact in cents: subtotal splits
        // exactly, and the recomputed taxes of both halves are checked
        // against the calculator directly
        assert_eq!(
            reduced.subtotal_cents + split.subtotal_cents,
            original.subtotal_cents
        );
        assert_eq!(reduced.total_cents, reduced.subtotal_cents + reduced.tax_cents);
        assert_eq!(split.total_cents, split.subtotal_cents + split.tax_cents);

        // no stock movement
        assert_eq!(catalog.product("p1").unwrap().stock, stock_p1);

        // new order sits at the front, same customer-less payment metadata
        assert_eq!(ledger.orders()[0].id, split.id);
        assert_eq!(split.payment_method, "card");
        assert_eq!(split.status, OrderStatus::Completed);
        assert_ne!(split.id, original.id);
    }

    #[test]
    fn split_single_unit_of_three() {
        // split 1 of 3 units → original keeps 2, split has 1, totals sum
        // to the pre-split total
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 3)]);
        let mut ledger = OrderLedger::new();
        let original = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();

        let split = ledger
            .split(
                &original.id,
                &[SplitSelection {
                    product_id: "p1".to_string(),
                    quantity: 1,
                }],
                rate(),
            )
            .unwrap();
        let reduced = ledger.get(&original.id).unwrap();

        assert_eq!(reduced.quantity_of("p1"), 2);
        assert_eq!(split.quantity_of("p1"), 1);
        // 3×$3.50 at 8%: 1050 + 84 = 1134; halves: (700+56) + (350+28)
        assert_eq!(original.total_cents, 1134);
        assert_eq!(reduced.total_cents + split.total_cents, 1134);
    }

    #[test]
    fn split_everything_leaves_empty_husk() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 2), ("p9", 1)]);
        let mut ledger = OrderLedger::new();
        let original = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();

        let split = ledger
            .split(
                &original.id,
                &[
                    SplitSelection {
                        product_id: "p1".to_string(),
                        quantity: 2,
                    },
                    SplitSelection {
                        product_id: "p9".to_string(),
                        quantity: 1,
                    },
                ],
                rate(),
            )
            .unwrap();

        // original retained as an empty husk with zero totals
        let husk = ledger.get(&original.id).unwrap();
        assert!(husk.lines.is_empty());
        assert_eq!(husk.subtotal_cents, 0);
        assert_eq!(husk.total_cents, 0);
        assert_eq!(husk.status, OrderStatus::Completed);

        assert_eq!(split.total_cents, original.total_cents);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn split_clamps_and_ignores_unknown_products() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 2)]);
        let mut ledger = OrderLedger::new();
        let original = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();

        let split = ledger
            .split(
                &original.id,
                &[
                    SplitSelection {
                        product_id: "p1".to_string(),
                        quantity: 50, // clamped to 2
                    },
                    SplitSelection {
                        product_id: "ghost".to_string(),
                        quantity: 1, // ignored
                    },
                ],
                rate(),
            )
            .unwrap();

        assert_eq!(split.quantity_of("p1"), 2);
        assert_eq!(split.lines.len(), 1);
    }

    #[test]
    fn split_noop_cases() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 2)]);
        let mut ledger = OrderLedger::new();
        let original = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();

        // empty selection
        assert!(ledger.split(&original.id, &[], rate()).is_none());

        // nothing survives the clamp
        let zeroed = [SplitSelection {
            product_id: "p1".to_string(),
            quantity: 0,
        }];
        assert!(ledger.split(&original.id, &zeroed, rate()).is_none());

        // stale id
        let one = [SplitSelection {
            product_id: "p1".to_string(),
            quantity: 1,
        }];
        assert!(ledger.split("missing", &one, rate()).is_none());

        // canceled order is terminal
        ledger.cancel(&original.id, &mut catalog);
        assert!(ledger.split(&original.id, &one, rate()).is_none());

        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn split_honors_tax_exempt_customer() {
        let mut catalog = catalog();
        let mut cart = cart_with(&catalog, &[("p1", 3)]);
        cart.set_customer(customer("c9", true));
        let mut ledger = OrderLedger::new();
        let original = ledger.checkout(&mut cart, &mut catalog, "cash", rate()).unwrap();
        assert_eq!(original.tax_cents, 0);

        let split = ledger
            .split(
                &original.id,
                &[SplitSelection {
                    product_id: "p1".to_string(),
                    quantity: 1,
                }],
                rate(),
            )
            .unwrap();

        assert_eq!(split.tax_cents, 0);
        assert_eq!(ledger.get(&original.id).unwrap().tax_cents, 0);
    }

    #[test]
    fn receipt_numbers_have_expected_shape() {
        let receipt = generate_receipt_number();
        // YYYYMMDD-HHMMSS-NNNN
        assert_eq!(receipt.len(), 20);
        assert_eq!(receipt.matches('-').count(), 2);
    }
}
