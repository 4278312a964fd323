//! Status Ledger Module
//!
//! Tracks per-submission ingestion progress. A status row is created on the
//! synchronous response path, handed to the detached persistence task, and
//! from then on mutated only by that task. Pollers read it through the status
//! endpoint.
//!
//! ## Invariant
//! On every mutation: `pending_count = total_count - success_count -
//! failure_count`, and the label is `"complete"` exactly when the pending
//! count reaches zero.

pub mod handlers;
pub mod ledger;
pub mod types;

pub use ledger::{MemoryStatusLedger, StatusStore};
pub use types::Status;

#[cfg(test)]
mod tests;
