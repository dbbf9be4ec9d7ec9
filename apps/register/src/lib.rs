//! # Orchard Register Library
//!
//! Application host for Orchard POS: session state, api surface,
//! persistence snapshot, sync outbox, reporting, and seed data.
//!
//! ## Module Organization
//! ```text
//! orchard_register/
//! ├── lib.rs          ◄─── You are here (exports, tracing init)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── register.rs ◄─── Register session aggregate + mutex wrapper
//! │   └── config.rs   ◄─── Store configuration
//! ├── api/
//! │   ├── mod.rs      ◄─── Shared response types
//! │   ├── cart.rs     ◄─── Cart operations
//! │   ├── orders.rs   ◄─── Checkout / cancel / edit / split / transfer
//! │   └── catalog.rs  ◄─── Store management operations
//! ├── outbox.rs       ◄─── Offline order-sync queue collaborator
//! ├── snapshot.rs     ◄─── Persistence boundary (JSON round-trip)
//! ├── reports.rs      ◄─── Dashboard projections
//! ├── seed.rs         ◄─── Demo catalog and customers
//! └── error.rs        ◄─── ApiError for the api surface
//! ```
//!
//! ## State Management
//! The entire session (catalog + cart + ledger) lives in one `Register`
//! value behind a single mutex. Each api call locks, reads the current
//! state, computes the next state, and releases - one logical actor, one
//! transition at a time, which is what keeps the "exactly one stock
//! adjustment per checkout/cancel" invariant intact.

pub mod api;
pub mod error;
pub mod outbox;
pub mod reports;
pub mod seed;
pub mod snapshot;
pub mod state;

pub use error::{ApiError, ErrorCode};
pub use state::{Config, Register, RegisterState};

use tracing_subscriber::EnvFilter;

/// Initializes tracing for the host process.
///
/// Default level is `info`; override with `RUST_LOG` (e.g.
/// `RUST_LOG=orchard_register=debug`).
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
