use serde::{Deserialize, Serialize};

/// Per-request capability of one user on one collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionAccess {
    pub collection_id: String,
    pub can_read: bool,
    pub can_write: bool,
}

impl CollectionAccess {
    /// The all-false capability an unknown (user, collection) pair resolves to.
    pub fn none(collection_id: &str) -> Self {
        Self {
            collection_id: collection_id.to_string(),
            can_read: false,
            can_write: false,
        }
    }
}
