// Record store port: durable append-only ledger of RSVP events plus the
// derived running tally.
//
// Responsibilities
// - Persist each event exactly once, before the caller gets an answer.
// - Return the tally reflecting the event just appended.
//
// Boundaries
// - No concrete medium here. Adapters implement this trait per backend.
// - No cross-process coordination; concurrent writers on the same medium are
//   only as safe as the medium itself.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::rsvp::core::event::RsvpEvent;
use crate::modules::rsvp::core::tally::Tally;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store write failed: {0}")]
    WriteFailed(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Durably append one event and return the updated tally.
    ///
    /// Partial-failure contract: if the ledger append succeeds but the tally
    /// update fails, the event stays durable without tally credit and the
    /// call reports `WriteFailed`. There is no rollback; the tally converges
    /// the next time it is recomputed from the ledger.
    async fn append(&self, event: &RsvpEvent) -> Result<Tally, StoreError>;

    /// Current running tally.
    async fn tally(&self) -> Result<Tally, StoreError>;
}

pub mod csv_file;
pub mod in_memory;
