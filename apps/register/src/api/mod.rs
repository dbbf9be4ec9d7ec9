//! # API Surface
//!
//! The inbound boundary the UI collaborator calls. Each function locks the
//! register, performs one engine operation, and returns a serializable
//! response - the command layer of the host, one module per concern.
//!
//! ## Failure Semantics at the Boundary
//! Operations that the engine defines as no-ops on stale references
//! (cancel, delete, transfer, split) report back through `applied` flags
//! rather than errors; errors are reserved for lookups (`NOT_FOUND`),
//! validation on catalog writes, and the two business refusals (empty-cart
//! checkout, category-in-use deletion).

pub mod cart;
pub mod catalog;
pub mod orders;

use serde::{Deserialize, Serialize};

/// Acknowledgement for operations with no-op-on-stale semantics.
///
/// `applied = false` means the operation found nothing to do (stale id,
/// already-canceled order) and changed no state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AckResponse {
    /// Whether the operation changed any state.
    pub applied: bool,
}

impl AckResponse {
    pub(crate) fn new(applied: bool) -> Self {
        AckResponse { applied }
    }
}
