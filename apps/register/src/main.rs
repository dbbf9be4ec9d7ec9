//! # Orchard Register Demo Binary
//!
//! Runs a scripted session against the seeded demo store: build a cart,
//! take payment, split the order, void it, and print the dashboard
//! figures. Useful for eyeballing the engine without a UI attached.
//!
//! ```bash
//! cargo run -p orchard-register
//! RUST_LOG=debug cargo run -p orchard-register
//! ```

use tracing::info;

use orchard_core::SplitSelection;
use orchard_register::api::{cart, orders};
use orchard_register::outbox::OutboxState;
use orchard_register::{reports, seed, snapshot, Config, RegisterState};

fn main() {
    orchard_register::init_tracing();

    let config = Config::from_env();
    let state = RegisterState::new(seed::demo_register());
    let outbox = OutboxState::new();

    info!(store = %config.store_name, tax_bps = config.tax_rate_bps, "Register ready");

    // Build a cart: two espressos, one pair of headphones, for Alice.
    cart::add_to_cart(&state, &config, "p1").expect("seeded product");
    cart::add_to_cart(&state, &config, "p1").expect("seeded product");
    cart::add_to_cart(&state, &config, "p5").expect("seeded product");
    let current = cart::assign_customer(&state, &config, "c1").expect("seeded customer");
    info!(
        subtotal = %config.format_currency(current.totals.subtotal_cents),
        tax = %config.format_currency(current.totals.tax_cents),
        total = %config.format_currency(current.totals.total_cents),
        "Cart ready"
    );

    // Take payment.
    let receipt =
        orders::complete_payment(&state, &outbox, &config, "card").expect("non-empty cart");

    // Split the headphones onto their own order.
    let split = orders::split_order(
        &state,
        &config,
        &receipt.order_id,
        &[SplitSelection {
            product_id: "p5".to_string(),
            quantity: 1,
        }],
    );
    if let Some(created) = &split.created {
        info!(receipt = %created.receipt_number, "Split order created");
    }

    // Void the remainder of the original order; espresso stock returns.
    orders::cancel_order(&state, &receipt.order_id);

    // Dashboard figures.
    let report = state.with_register(|r| reports::sales_report(r.ledger.orders()));
    info!(
        gross = %config.format_currency(report.gross_sales_cents),
        orders = report.order_count,
        items = report.items_sold,
        canceled = report.canceled_count,
        pending_sync = outbox.count_pending(),
        "Session summary"
    );

    // Persist the session for next launch.
    if let Some(path) = snapshot::default_snapshot_path() {
        if let Err(err) = state.with_register(|r| snapshot::save(r, &path)) {
            tracing::warn!(%err, "Snapshot not saved");
        }
    }
}
