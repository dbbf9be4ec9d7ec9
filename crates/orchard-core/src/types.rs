//! # Domain Types
//!
//! Core domain types for Orchard POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          Domain Types                               │
//! │                                                                     │
//! │  ┌───────────────┐   ┌───────────────┐   ┌────────────────────┐    │
//! │  │    Product    │   │   Customer    │   │   CompletedOrder   │    │
//! │  │  ───────────  │   │  ───────────  │   │  ────────────────  │    │
//! │  │  id (UUID)    │   │  id           │   │  id (UUID)         │    │
//! │  │  sku          │   │  tax_exempt   │   │  receipt_number    │    │
//! │  │  price_cents  │   │  loyalty pts  │   │  lines (frozen)    │    │
//! │  │  stock        │   │               │   │  subtotal/tax/total│    │
//! │  └───────────────┘   └───────────────┘   │  status            │    │
//! │                                          └────────────────────┘    │
//! │  ┌───────────────┐   ┌───────────────┐                             │
//! │  │   TaxRate     │   │  OrderStatus  │                             │
//! │  │  bps (u32)    │   │  Completed    │                             │
//! │  │  800 = 8%     │   │  Canceled     │                             │
//! │  └───────────────┘   └───────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! An `OrderLine` is a frozen copy of product data at the moment of sale.
//! Completed orders stay historically accurate even when the catalog's
//! prices, names, or stock change afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate in basis points (1 bps = 0.01%).
///
/// 800 bps = 8%, the demo store's default. Basis points keep the rate an
/// integer so tax math never touches floating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (convenience for config).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if the rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::from_bps(crate::DEFAULT_TAX_RATE_BPS)
    }
}

// =============================================================================
// Category
// =============================================================================

/// A product category shown as a tab in the catalog UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    /// Unique identifier.
    pub id: String,

    /// Display name ("Beverages", "Snacks", ...).
    pub name: String,
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry available for sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name shown on the product card and the receipt.
    pub name: String,

    /// Category this product belongs to.
    pub category_id: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Unit price in cents (never negative).
    pub price_cents: i64,

    /// Sellable quantity remaining. Decremented at checkout, restored at
    /// cancel; never mutated by cart operations.
    pub stock: i64,

    /// Image reference for the product card.
    pub image_url: String,

    /// Unit label ("each", "330ml", ...).
    pub unit_label: String,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last edited.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether at least one unit can be sold.
    #[inline]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A known customer.
///
/// Immutable from the order engine's point of view: orders hold a frozen
/// copy, and transfer-customer swaps the copy, never the customer record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Customer {
    /// Unique identifier.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Contact email.
    pub email: String,

    /// Loyalty point balance (display only in this demo).
    pub loyalty_points: i64,

    /// Zeroes the tax component of any order this customer is attached to.
    pub tax_exempt: bool,
}

// =============================================================================
// Order Status
// =============================================================================

/// Status of a completed order.
///
/// The transition is one-way: `Completed → Canceled`. There is no un-cancel;
/// deletion removes the record entirely and is not a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Paid and finalized; its stock decrement is in effect.
    Completed,
    /// Voided; its stock effect has been reversed exactly once.
    Canceled,
}

// =============================================================================
// Order Line
// =============================================================================

/// A line item frozen inside a completed order.
///
/// Uses the snapshot pattern: product data is copied at checkout time, so
/// the quantity and price here are historical and independent of live stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    /// Product this line refers to.
    pub product_id: String,

    /// SKU at time of sale (frozen).
    pub sku: String,

    /// Product name at time of sale (frozen).
    pub name: String,

    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,

    /// Quantity sold.
    pub quantity: i64,
}

impl OrderLine {
    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Line total before tax (unit price × quantity).
    #[inline]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents * self.quantity
    }
}

// =============================================================================
// Completed Order
// =============================================================================

/// A committed order in the ledger.
///
/// ## Invariants
/// - `total_cents = subtotal_cents + tax_cents`
/// - `subtotal_cents = Σ line.unit_price_cents × line.quantity`
/// - line order is insertion order and is meaningful to the UI
/// - once `Canceled`, the record only changes by deletion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletedOrder {
    /// Unique identifier (UUID v4), generated at checkout or split time.
    pub id: String,

    /// Human-readable receipt number (display only, not an identity).
    pub receipt_number: String,

    /// Frozen line items, insertion order preserved.
    pub lines: Vec<OrderLine>,

    /// Frozen copy of the customer, if one was attached.
    pub customer: Option<Customer>,

    /// Sum of line totals, in cents.
    pub subtotal_cents: i64,

    /// Tax in cents (zero when the customer is tax-exempt).
    pub tax_cents: i64,

    /// subtotal + tax, in cents.
    pub total_cents: i64,

    /// Payment method label as reported by the payment collaborator.
    pub payment_method: String,

    /// When the order was committed.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// Completed or Canceled.
    pub status: OrderStatus,
}

impl CompletedOrder {
    /// Checks whether the order has been voided.
    #[inline]
    pub fn is_canceled(&self) -> bool {
        self.status == OrderStatus::Canceled
    }

    /// Returns the quantity of a product in this order, 0 if absent.
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.lines
            .iter()
            .find(|l| l.product_id == product_id)
            .map(|l| l.quantity)
            .unwrap_or(0)
    }

    /// Total quantity across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

// =============================================================================
// Split Selection
// =============================================================================

/// One line of a split request: move `quantity` units of `product_id` from
/// an existing order into a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SplitSelection {
    /// Product to move.
    pub product_id: String,

    /// Units to move (clamped to what the order actually holds).
    pub quantity: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================
