//! # Sync Outbox
//!
//! The offline order-sync collaborator, isolated from the lifecycle.
//!
//! ## Outbox Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  complete_payment ──► outbox.queue(order JSON)                      │
//! │                              │                                      │
//! │  (later, whenever online)    ▼                                      │
//! │  uploader collaborator ──► pending() ──► try upload                 │
//! │                              │                                      │
//! │                 ┌────────────┴────────────┐                         │
//! │                 ▼                         ▼                         │
//! │           mark_synced(id)          mark_failed(id, err)             │
//! │           (entry retired)          (attempts += 1, retried later)   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The queue is best-effort and fire-and-forget: the lifecycle never
//! waits on it, reads from it, or resolves conflicts through it. Keeping
//! it a separate state type means checkout cannot be blocked - or
//! corrupted - by anything the uploader does.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An entry awaiting upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxEntry {
    /// Entry id (UUID v4).
    pub id: String,

    /// Entity kind being synced ("ORDER").
    pub entity_type: String,

    /// Id of the entity being synced.
    pub entity_id: String,

    /// Full entity as JSON.
    pub payload: String,

    /// Number of upload attempts so far.
    pub attempts: i64,

    /// Last upload error, if any.
    pub last_error: Option<String>,

    /// When the entry was queued.
    pub queued_at: DateTime<Utc>,

    /// When an upload was last attempted.
    pub attempted_at: Option<DateTime<Utc>>,

    /// When the upload succeeded.
    pub synced_at: Option<DateTime<Utc>>,
}

impl OutboxEntry {
    fn is_pending(&self) -> bool {
        self.synced_at.is_none()
    }
}

/// The in-memory outbox queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Outbox {
    entries: Vec<OutboxEntry>,
}

impl Outbox {
    /// Queues an entity for upload; returns the entry id.
    pub fn queue(&mut self, entity_type: &str, entity_id: &str, payload: &str) -> String {
        let entry = OutboxEntry {
            id: Uuid::new_v4().to_string(),
            entity_type: entity_type.to_string(),
            entity_id: entity_id.to_string(),
            payload: payload.to_string(),
            attempts: 0,
            last_error: None,
            queued_at: Utc::now(),
            attempted_at: None,
            synced_at: None,
        };
        let id = entry.id.clone();
        self.entries.push(entry);
        id
    }

    /// Up to `limit` pending entries, oldest first.
    pub fn pending(&self, limit: usize) -> Vec<OutboxEntry> {
        self.entries
            .iter()
            .filter(|e| e.is_pending())
            .take(limit)
            .cloned()
            .collect()
    }

    /// Retires an entry after a successful upload. Stale id → false.
    pub fn mark_synced(&mut self, entry_id: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == entry_id) {
            Some(entry) => {
                let now = Utc::now();
                entry.attempts += 1;
                entry.attempted_at = Some(now);
                entry.synced_at = Some(now);
                true
            }
            None => false,
        }
    }

    /// Records a failed attempt; the entry stays pending for retry.
    pub fn mark_failed(&mut self, entry_id: &str, error: &str) -> bool {
        match self.entries.iter_mut().find(|e| e.id == entry_id) {
            Some(entry) => {
                entry.attempts += 1;
                entry.attempted_at = Some(Utc::now());
                entry.last_error = Some(error.to_string());
                true
            }
            None => false,
        }
    }

    /// Number of entries still awaiting upload.
    pub fn count_pending(&self) -> usize {
        self.entries.iter().filter(|e| e.is_pending()).count()
    }
}

/// Host-managed outbox state (same mutex discipline as the register).
#[derive(Debug, Clone, Default)]
pub struct OutboxState {
    outbox: Arc<Mutex<Outbox>>,
}

impl OutboxState {
    /// Creates an empty outbox.
    pub fn new() -> Self {
        OutboxState::default()
    }

    /// Queues an entity for upload; returns the entry id.
    pub fn queue(&self, entity_type: &str, entity_id: &str, payload: &str) -> String {
        let mut outbox = self.outbox.lock().expect("Outbox mutex poisoned");
        outbox.queue(entity_type, entity_id, payload)
    }

    /// Up to `limit` pending entries, oldest first.
    pub fn pending(&self, limit: usize) -> Vec<OutboxEntry> {
        let outbox = self.outbox.lock().expect("Outbox mutex poisoned");
        outbox.pending(limit)
    }

    /// Retires an entry after a successful upload.
    pub fn mark_synced(&self, entry_id: &str) -> bool {
        let mut outbox = self.outbox.lock().expect("Outbox mutex poisoned");
        outbox.mark_synced(entry_id)
    }

    /// Records a failed attempt.
    pub fn mark_failed(&self, entry_id: &str, error: &str) -> bool {
        let mut outbox = self.outbox.lock().expect("Outbox mutex poisoned");
        outbox.mark_failed(entry_id, error)
    }

    /// Number of entries still awaiting upload.
    pub fn count_pending(&self) -> usize {
        let outbox = self.outbox.lock().expect("Outbox mutex poisoned");
        outbox.count_pending()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
