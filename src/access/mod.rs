//! Access Guard Module
//!
//! Decides write admission. A (user, collection) pair resolves to a
//! [`CollectionAccess`] capability; an absent mapping means no capabilities,
//! never an error. Read-set filtering is the storage collaborator's concern,
//! so read endpoints do not gate here.
//!
//! User identity travels as an explicit [`Identity`] value extracted from the
//! Basic auth header and passed into each handler. Credential verification is
//! out of scope.

pub mod guard;
pub mod identity;
pub mod types;

pub use guard::{AccessResolver, MemoryAccessResolver};
pub use identity::Identity;
pub use types::CollectionAccess;

#[cfg(test)]
mod tests;
