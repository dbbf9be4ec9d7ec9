//! # Register Snapshot
//!
//! The persistence boundary: the whole session as one plain JSON record.
//!
//! ## Round-Trip Fidelity
//! A snapshot written and read back reproduces the register verbatim -
//! catalog (with live stock), order ledger (order and status included),
//! and the in-progress cart. The UI's local-storage layer and this file
//! share the same serialized shape.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use orchard_core::{Cart, Catalog, CompletedOrder, OrderLedger};

use crate::state::Register;

/// Snapshot read/write failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot (de)serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// The serialized form of a [`Register`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterSnapshot {
    /// Products, categories, customers - stock included.
    pub catalog: Catalog,

    /// Completed orders, most recent first.
    pub orders: Vec<CompletedOrder>,

    /// The in-progress cart (lines + customer).
    pub cart: Cart,
}

impl RegisterSnapshot {
    /// Captures the current register.
    pub fn capture(register: &Register) -> Self {
        RegisterSnapshot {
            catalog: register.catalog.clone(),
            orders: register.ledger.orders().to_vec(),
            cart: register.cart.clone(),
        }
    }

    /// Rebuilds a register from this snapshot.
    pub fn restore(self) -> Register {
        Register {
            catalog: self.catalog,
            cart: self.cart,
            ledger: OrderLedger::from_orders(self.orders),
        }
    }
}

/// Platform-correct location for the snapshot file.
///
/// macOS: `~/Library/Application Support/com.orchard.orchard-pos/register.json`
/// Linux: `~/.local/share/orchard-pos/register.json`
pub fn default_snapshot_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "orchard", "orchard-pos")
        .map(|dirs| dirs.data_dir().join("register.json"))
}

/// Writes a register snapshot to a file.
pub fn save(register: &Register, path: &Path) -> Result<(), SnapshotError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let snapshot = RegisterSnapshot::capture(register);
    let json = serde_json::to_string_pretty(&snapshot)?;
    fs::write(path, json)?;

    info!(path = %path.display(), orders = snapshot.orders.len(), "Register snapshot saved");
    Ok(())
}

/// Reads a register snapshot back from a file.
pub fn load(path: &Path) -> Result<Register, SnapshotError> {
    let json = fs::read_to_string(path)?;
    let snapshot: RegisterSnapshot = serde_json::from_str(&json)?;

    info!(path = %path.display(), orders = snapshot.orders.len(), "Register snapshot loaded");
    Ok(snapshot.restore())
}

// =============================================================================
// Unit Tests
// =============================================================================
