//! # Register State
//!
//! The session aggregate and its thread-safe wrapper.
//!
//! ## Single-Writer Replace Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  api call ──► lock ──► read state ──► compute next state ──► unlock │
//! │                                                                     │
//! │  One logical actor triggers one transition at a time. Because each  │
//! │  operation runs start-to-finish under the lock, stock is adjusted   │
//! │  exactly once per checkout/cancel even if the host gains real       │
//! │  concurrency later.                                                 │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use orchard_core::{Cart, Catalog, OrderLedger};

/// The whole POS session: catalog, in-progress cart, completed orders.
///
/// A plain value with no interior mutability - ownership of the mutex
/// lives in [`RegisterState`], and the snapshot module serializes this
/// struct wholesale.
#[derive(Debug, Clone, Default)]
pub struct Register {
    /// Products, categories, customers.
    pub catalog: Catalog,

    /// The in-progress order.
    pub cart: Cart,

    /// Completed orders, most recent first.
    pub ledger: OrderLedger,
}

impl Register {
    /// Creates an empty register.
    pub fn new() -> Self {
        Register::default()
    }
}

/// Host-managed register state.
///
/// ## Thread Safety
/// `Arc<Mutex<Register>>`:
/// - `Arc`: shared ownership across api call sites
/// - `Mutex`: exclusive access for the duration of one operation
///
/// ## Why Not RwLock?
/// Nearly every operation writes, and each one is quick. A RwLock would
/// add complexity with no measurable benefit.
#[derive(Debug, Clone)]
pub struct RegisterState {
    register: Arc<Mutex<Register>>,
}

impl RegisterState {
    /// Wraps a register (usually seeded or loaded from a snapshot).
    pub fn new(register: Register) -> Self {
        RegisterState {
            register: Arc::new(Mutex::new(register)),
        }
    }

    /// Runs a closure with read access to the register.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = state.with_register(|r| r.ledger.len());
    /// ```
    pub fn with_register<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Register) -> R,
    {
        let register = self.register.lock().expect("Register mutex poisoned");
        f(&register)
    }

    /// Runs a closure with write access to the register.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// state.with_register_mut(|r| r.cart.clear());
    /// ```
    pub fn with_register_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Register) -> R,
    {
        let mut register = self.register.lock().expect("Register mutex poisoned");
        f(&mut register)
    }
}

impl Default for RegisterState {
    fn default() -> Self {
        RegisterState::new(Register::new())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
