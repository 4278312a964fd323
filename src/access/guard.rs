use dashmap::DashMap;

use super::types::CollectionAccess;

/// Access resolution collaborator. Never errors: missing grants resolve to
/// all-false capabilities.
pub trait AccessResolver: Send + Sync {
    fn resolve(&self, user: &str, collection_id: &str) -> CollectionAccess;
}

/// In-memory grant table keyed by (user, collection).
pub struct MemoryAccessResolver {
    grants: DashMap<(String, String), (bool, bool)>,
}

impl MemoryAccessResolver {
    pub fn new() -> Self {
        Self {
            grants: DashMap::new(),
        }
    }

    pub fn grant(&self, user: &str, collection_id: &str, can_read: bool, can_write: bool) {
        tracing::info!(
            "Granting {} read={} write={} on collection {}",
            user,
            can_read,
            can_write,
            collection_id
        );
        self.grants.insert(
            (user.to_string(), collection_id.to_string()),
            (can_read, can_write),
        );
    }
}

impl Default for MemoryAccessResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl AccessResolver for MemoryAccessResolver {
    fn resolve(&self, user: &str, collection_id: &str) -> CollectionAccess {
        match self
            .grants
            .get(&(user.to_string(), collection_id.to_string()))
        {
            Some(entry) => CollectionAccess {
                collection_id: collection_id.to_string(),
                can_read: entry.0,
                can_write: entry.1,
            },
            None => CollectionAccess::none(collection_id),
        }
    }
}
