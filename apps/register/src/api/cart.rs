//! # Cart Operations
//!
//! Cart manipulation for the order-summary panel.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  ┌─────────┐      ┌──────────┐      ┌─────────┐      ┌───────────┐  │
//! │  │  Empty  │─────►│ Building │─────►│ Payment │─────►│ Completed │  │
//! │  │  Cart   │      │          │      │  Modal  │      │   Order   │  │
//! │  └─────────┘      └──────────┘      └─────────┘      └───────────┘  │
//! │                        │                  │                         │
//! │                   add_to_cart        complete_payment               │
//! │                   update_cart_line   (orders.rs)                    │
//! │                   assign_customer                                   │
//! │                        │                                            │
//! │                        ▼                                            │
//! │                   clear_cart ──────────────────► (back to empty)    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use orchard_core::{compute_totals, Cart, CartLine, Customer, OrderTotals, TaxRate};

use crate::error::ApiError;
use crate::state::{Config, RegisterState};

/// Cart contents plus derived totals, as the UI renders them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// Lines in insertion order.
    pub lines: Vec<CartLine>,

    /// Attached customer, if any.
    pub customer: Option<Customer>,

    /// Derived subtotal/tax/total - always recomputed, never cached.
    pub totals: OrderTotals,
}

/// Builds a response by re-running the Totals Calculator over the cart.
pub(crate) fn cart_response(cart: &Cart, rate: TaxRate) -> CartResponse {
    let totals = compute_totals(&cart.to_order_lines(), cart.tax_exempt(), rate);
    CartResponse {
        lines: cart.lines.clone(),
        customer: cart.customer.clone(),
        totals,
    }
}

/// Returns the current cart with totals.
pub fn get_cart(state: &RegisterState, config: &Config) -> CartResponse {
    debug!("get_cart");
    state.with_register(|r| cart_response(&r.cart, config.tax_rate()))
}

/// Adds one unit of a product to the cart.
///
/// ## Behavior
/// - unknown product id: `NOT_FOUND`
/// - already in cart: quantity + 1, silently capped at the stock ceiling
/// - out-of-stock product: the cart is returned unchanged
pub fn add_to_cart(
    state: &RegisterState,
    config: &Config,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart");

    state.with_register_mut(|r| {
        let product = r
            .catalog
            .product(product_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Product", product_id))?;

        r.cart.add_product(&product);
        Ok(cart_response(&r.cart, config.tax_rate()))
    })
}

/// Sets a line's quantity (≤ 0 removes the line; excess clamps to stock).
///
/// Never fails: clamping and stale ids are silent by design, so the
/// quantity stepper in the UI stays responsive.
pub fn update_cart_line(
    state: &RegisterState,
    config: &Config,
    product_id: &str,
    quantity: i64,
) -> CartResponse {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_line");

    state.with_register_mut(|r| {
        r.cart.update_quantity(product_id, quantity);
        cart_response(&r.cart, config.tax_rate())
    })
}

/// Empties the cart and detaches the customer.
pub fn clear_cart(state: &RegisterState, config: &Config) -> CartResponse {
    debug!("clear_cart");

    state.with_register_mut(|r| {
        r.cart.clear();
        cart_response(&r.cart, config.tax_rate())
    })
}

/// Attaches a known customer to the in-progress order.
///
/// Totals in the response already reflect the customer's tax exemption.
pub fn assign_customer(
    state: &RegisterState,
    config: &Config,
    customer_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(customer_id = %customer_id, "assign_customer");

    state.with_register_mut(|r| {
        let customer = r
            .catalog
            .customer(customer_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Customer", customer_id))?;

        r.cart.set_customer(customer);
        Ok(cart_response(&r.cart, config.tax_rate()))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
