//! # Order Operations
//!
//! Checkout and everything that can happen to a completed order afterwards.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use orchard_core::{CompletedOrder, OrderStatus, SplitSelection};

use crate::api::cart::{cart_response, CartResponse};
use crate::api::AckResponse;
use crate::error::ApiError;
use crate::outbox::OutboxState;
use crate::state::{Config, RegisterState};

/// Result of a successful checkout.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub order_id: String,
    pub receipt_number: String,
    pub total_cents: i64,
    pub line_count: usize,
}

/// One row of the order-history list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: String,
    pub receipt_number: String,
    pub status: OrderStatus,
    pub customer_name: Option<String>,
    pub total_cents: i64,
    pub line_count: usize,
    pub timestamp: String,
}

impl From<&CompletedOrder> for OrderSummary {
    fn from(order: &CompletedOrder) -> Self {
        OrderSummary {
            order_id: order.id.clone(),
            receipt_number: order.receipt_number.clone(),
            status: order.status,
            customer_name: order.customer.as_ref().map(|c| c.name.clone()),
            total_cents: order.total_cents,
            line_count: order.lines.len(),
            timestamp: order.created_at.to_rfc3339(),
        }
    }
}

/// Result of a split request.
///
/// `created` is None when the engine treated the request as a no-op
/// (stale id, canceled order, empty or fully-clamped selection).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResponse {
    pub created: Option<OrderSummary>,
}

/// Commits the cart into a completed order.
///
/// ## What This Does
/// 1. Runs the engine checkout (empty cart → `BUSINESS_LOGIC` error)
/// 2. Queues the finished order on the sync outbox for the offline
///    best-effort upload collaborator
pub fn complete_payment(
    state: &RegisterState,
    outbox: &OutboxState,
    config: &Config,
    payment_method: &str,
) -> Result<CheckoutResponse, ApiError> {
    debug!(payment_method = %payment_method, "complete_payment");

    let order = state.with_register_mut(|r| {
        let (catalog, cart, ledger) = (&mut r.catalog, &mut r.cart, &mut r.ledger);
        ledger.checkout(cart, catalog, payment_method, config.tax_rate())
    })?;

    // Best-effort sync: queue outside the register lock; the outbox is a
    // separate collaborator and never participates in lifecycle decisions.
    let payload = serde_json::to_string(&order).unwrap_or_default();
    outbox.queue("ORDER", &order.id, &payload);

    info!(
        order_id = %order.id,
        receipt = %order.receipt_number,
        total = %config.format_currency(order.total_cents),
        lines = order.lines.len(),
        "Order completed"
    );

    Ok(CheckoutResponse {
        order_id: order.id.clone(),
        receipt_number: order.receipt_number.clone(),
        total_cents: order.total_cents,
        line_count: order.lines.len(),
    })
}

/// Order history, most recent first.
pub fn list_orders(state: &RegisterState) -> Vec<OrderSummary> {
    debug!("list_orders");
    state.with_register(|r| r.ledger.orders().iter().map(OrderSummary::from).collect())
}

/// Full order record for the details/receipt view.
pub fn order_details(state: &RegisterState, order_id: &str) -> Result<CompletedOrder, ApiError> {
    debug!(order_id = %order_id, "order_details");

    state.with_register(|r| {
        r.ledger
            .get(order_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Order", order_id))
    })
}

/// Voids an order and restores its stock. Idempotent.
pub fn cancel_order(state: &RegisterState, order_id: &str) -> AckResponse {
    debug!(order_id = %order_id, "cancel_order");

    let applied = state.with_register_mut(|r| {
        let (catalog, ledger) = (&mut r.catalog, &mut r.ledger);
        ledger.cancel(order_id, catalog)
    });

    if applied {
        info!(order_id = %order_id, "Order canceled, stock restored");
    }
    AckResponse::new(applied)
}

/// Permanently removes an order record. Stock is untouched.
pub fn delete_order(state: &RegisterState, order_id: &str) -> AckResponse {
    debug!(order_id = %order_id, "delete_order");

    let applied = state.with_register_mut(|r| r.ledger.delete(order_id));
    if applied {
        info!(order_id = %order_id, "Order record deleted");
    }
    AckResponse::new(applied)
}

/// Reopens an order for editing: cancel it and reload its lines and
/// customer into the live cart. The response carries the reloaded cart;
/// `applied = false` (with the cart untouched) for a stale id.
pub fn edit_order(
    state: &RegisterState,
    config: &Config,
    order_id: &str,
) -> (AckResponse, CartResponse) {
    debug!(order_id = %order_id, "edit_order");

    state.with_register_mut(|r| {
        let (catalog, cart, ledger) = (&mut r.catalog, &mut r.cart, &mut r.ledger);
        let applied = ledger.edit(order_id, cart, catalog);
        if applied {
            info!(order_id = %order_id, "Order reopened into cart");
        }
        (AckResponse::new(applied), cart_response(cart, config.tax_rate()))
    })
}

/// Reassigns an order to another known customer.
pub fn transfer_customer(
    state: &RegisterState,
    order_id: &str,
    customer_id: &str,
) -> Result<AckResponse, ApiError> {
    debug!(order_id = %order_id, customer_id = %customer_id, "transfer_customer");

    state.with_register_mut(|r| {
        let customer = r
            .catalog
            .customer(customer_id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Customer", customer_id))?;

        let applied = r.ledger.transfer_customer(order_id, customer);
        Ok(AckResponse::new(applied))
    })
}

/// Splits selected quantities out of an order into a new one.
pub fn split_order(
    state: &RegisterState,
    config: &Config,
    order_id: &str,
    selections: &[SplitSelection],
) -> SplitResponse {
    debug!(order_id = %order_id, selections = selections.len(), "split_order");

    let created = state.with_register_mut(|r| {
        r.ledger.split(order_id, selections, config.tax_rate())
    });

    if let Some(order) = &created {
        info!(
            original = %order_id,
            split = %order.id,
            total = %config.format_currency(order.total_cents),
            "Order split"
        );
    }

    SplitResponse {
        created: created.as_ref().map(OrderSummary::from),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
