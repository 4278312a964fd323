//! Ingestion Orchestrator Module
//!
//! Drives a submission through its lifecycle:
//!
//! 1. **Validating**: media types, body size, write capability. Any failure
//!    aborts with a client error before any state is touched.
//! 2. **Accepted**: the bundle is decoded and validated, a pending status row
//!    is created, and the client gets a `202` with that row — before a single
//!    object is persisted.
//! 3. **Processing**: a detached task owns its own copies of the objects and
//!    collection id, persists the batch through the object store, and writes
//!    the aggregate outcome back to the status ledger. It is never awaited,
//!    cancelled, retried, or surfaced to the original caller.
//! 4. **Complete**: implicit, when the pending count reaches zero.

pub mod handlers;
pub mod pipeline;
