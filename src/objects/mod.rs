//! Objects Module
//!
//! The object-store collaborator and the read/list endpoints.
//!
//! ## Listing Protocol
//! A list request may carry `Range: items <first>-<last>`. A valid window gets
//! a `206 Partial Content` reply with `Content-Range: items
//! <first>-<last>/<total>`; no window means the full result set; a malformed
//! header is `416`. Filters (`added_after`, `match[...]`) are passed through
//! to the store untouched.

pub mod handlers;
pub mod store;
pub mod types;

pub use store::{MemoryObjectStore, ObjectStore, PersistOutcome};
pub use types::Filter;
