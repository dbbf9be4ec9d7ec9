//! # Cart Engine
//!
//! The in-progress, uncommitted order being assembled before checkout.
//!
//! ## Clamping, Not Erroring
//! Stock availability is advisory for UX here: quantities silently clamp to
//! the stock ceiling captured when the product was added, and operations on
//! products not in the cart are no-ops. The cart never touches live catalog
//! stock - that happens exactly once, at checkout (and its inverse at
//! cancel), in [`crate::orders`].
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  UI Action                Operation              Cart State Change  │
//! │  ─────────                ─────────              ─────────────────  │
//! │  Click product ─────────► add_product() ───────► qty+1 (≤ ceiling)  │
//! │  Change quantity ───────► update_quantity() ───► clamp or remove    │
//! │  Pick customer ─────────► set_customer() ──────► customer = Some    │
//! │  Click clear ───────────► clear() ─────────────► lines + customer   │
//! │  Edit past order ───────► load() ──────────────► lines ← order      │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{Customer, OrderLine, Product};

/// A line in the cart.
///
/// ## Snapshot Pattern
/// `sku`, `name`, and `unit_price_cents` are frozen copies taken when the
/// product was added; a later catalog edit does not change what the
/// customer sees in the cart. `stock_ceiling` freezes the sellable stock at
/// add time and caps every later quantity change on this line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product this line refers to.
    pub product_id: String,

    /// SKU at time of adding (frozen).
    pub sku: String,

    /// Product name at time of adding (frozen).
    pub name: String,

    /// Unit price in cents at time of adding (frozen).
    pub unit_price_cents: i64,

    /// Sellable stock at time of adding; quantity never exceeds this.
    pub stock_ceiling: i64,

    /// Units in the cart (1 ≤ quantity ≤ stock_ceiling).
    pub quantity: i64,

    /// When this line was added.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a cart line from a product with quantity 1.
    pub fn from_product(product: &Product) -> Self {
        CartLine {
            product_id: product.id.clone(),
            sku: product.sku.clone(),
            name: product.name.clone(),
            unit_price_cents: product.price_cents,
            stock_ceiling: product.stock,
            quantity: 1,
            added_at: Utc::now(),
        }
    }

    /// Line total before tax (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }

    /// Freezes this line into an order line for checkout.
    pub fn to_order_line(&self) -> OrderLine {
        OrderLine {
            product_id: self.product_id.clone(),
            sku: self.sku.clone(),
            name: self.name.clone(),
            unit_price_cents: self.unit_price_cents,
            quantity: self.quantity,
        }
    }
}

/// The cart: an ordered line sequence plus an optional customer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,

    /// Customer attached to the in-progress order, if any.
    pub customer: Option<Customer>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds one unit of a product.
    ///
    /// ## Behavior
    /// - already in the cart: quantity + 1, capped at the line's stock
    ///   ceiling (a no-op at the cap, not an error)
    /// - not in the cart and stock > 0: new line with quantity 1
    /// - not in the cart and stock = 0: no-op
    pub fn add_product(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = (line.quantity + 1).min(line.stock_ceiling);
            return;
        }

        if product.in_stock() {
            self.lines.push(CartLine::from_product(product));
        }
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - quantity ≤ 0: the line is removed entirely
    /// - otherwise: clamped to the line's stock ceiling (silent clamp)
    /// - product not in the cart: no-op
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) {
        if quantity <= 0 {
            self.lines.retain(|l| l.product_id != product_id);
            return;
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity.min(line.stock_ceiling);
        }
    }

    /// Empties the cart and detaches the customer.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.customer = None;
    }

    /// Attaches a customer to the in-progress order.
    pub fn set_customer(&mut self, customer: Customer) {
        self.customer = Some(customer);
    }

    /// Replaces the cart contents wholesale (used by edit-order reload).
    pub fn load(&mut self, lines: Vec<CartLine>, customer: Option<Customer>) {
        self.lines = lines;
        self.customer = customer;
    }

    /// Whether the attached customer is tax-exempt (false with no customer).
    pub fn tax_exempt(&self) -> bool {
        self.customer.as_ref().map(|c| c.tax_exempt).unwrap_or(false)
    }

    /// Freezes all lines into order lines.
    pub fn to_order_lines(&self) -> Vec<OrderLine> {
        self.lines.iter().map(CartLine::to_order_line).collect()
    }

    /// Sum of line totals, in cents.
    pub fn subtotal_cents(&self) -> i64 {
        self.lines.iter().map(CartLine::line_total_cents).sum()
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Checks if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn add_new_product_starts_at_one() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 350, 100));

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].quantity, 1);
        assert_eq!(cart.subtotal_cents(), 350);
    }

    #[test]
    fn add_same_product_increments() {
        let mut cart = Cart::new();
        let p = product("p1", 350, 100);
        cart.add_product(&p);
        cart.add_product(&p);
        cart.add_product(&p);

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn add_clamps_at_stock_ceiling() {
        // N adds against stock S < N end at exactly S
        let mut cart = Cart::new();
        let p = product("p1", 350, 3);
        for _ in 0..10 {
            cart.add_product(&p);
        }

        assert_eq!(cart.total_quantity(), 3);
    }

    #[test]
    fn add_out_of_stock_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&product("p12", 5500, 0));

        assert!(cart.is_empty());
    }

    #[test]
    fn update_quantity_clamps_silently() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 350, 5));

        cart.update_quantity("p1", 99);
        assert_eq!(cart.lines[0].quantity, 5);

        cart.update_quantity("p1", 2);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 350, 5));
        cart.add_product(&product("p2", 450, 5));

        cart.update_quantity("p1", 0);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines[0].product_id, "p2");

        cart.update_quantity("p2", -3);
        assert!(cart.is_empty());
    }

    #[test]
    fn update_unknown_product_is_noop() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 350, 5));

        cart.update_quantity("missing", 4);
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn clear_drops_lines_and_customer() {
        let mut cart = Cart::new();
        cart.add_product(&product("p1", 350, 5));
        cart.set_customer(Customer {
            id: "c1".to_string(),
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
            loyalty_points: 1250,
            tax_exempt: false,
        });

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.customer.is_none());
        assert!(!cart.tax_exempt());
    }

    #[test]
    fn cart_price_is_frozen_at_add_time() {
        let mut cart = Cart::new();
        let mut p = product("p1", 350, 5);
        cart.add_product(&p);

        // Catalog edit after the fact does not reprice the cart line.
        p.price_cents = 9999;
        assert_eq!(cart.subtotal_cents(), 350);
    }
}
