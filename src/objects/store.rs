use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use crate::pagination::Range;

use super::types::Filter;

/// Aggregate result of persisting one bundle's objects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PersistOutcome {
    pub succeeded: u64,
    pub failed: u64,
}

/// Object storage collaborator.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Persists a batch of objects into a collection, counting per-object
    /// outcomes. Individual failures are tallied, never raised: by the time
    /// this runs, the client has already been answered.
    async fn persist(&self, collection_id: &str, objects: Vec<Value>) -> PersistOutcome;

    /// Lists a collection's objects. A valid `range` narrows the result to
    /// the requested window and gets its `total` filled in with the full
    /// count; the sentinel or an invalid range returns everything.
    async fn objects(
        &self,
        collection_id: &str,
        range: &mut Range,
        filter: &Filter,
    ) -> Result<Vec<Value>>;

    /// Fetches the objects matching one object id within a collection.
    async fn object(
        &self,
        collection_id: &str,
        object_id: &str,
        filter: &Filter,
    ) -> Result<Vec<Value>>;
}

/// In-memory object store: an ordered list per collection.
///
/// An object must be a JSON object with non-empty string `id` and `type`
/// fields to be stored; anything else counts as a persistence failure.
pub struct MemoryObjectStore {
    collections: DashMap<String, Vec<Value>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }

    fn storable(object: &Value) -> bool {
        let Some(fields) = object.as_object() else {
            return false;
        };
        ["id", "type"].iter().all(|field| {
            fields
                .get(*field)
                .and_then(Value::as_str)
                .is_some_and(|value| !value.is_empty())
        })
    }
}

impl Default for MemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn persist(&self, collection_id: &str, objects: Vec<Value>) -> PersistOutcome {
        let mut outcome = PersistOutcome::default();
        let mut rows = self.collections.entry(collection_id.to_string()).or_default();

        for object in objects {
            if Self::storable(&object) {
                rows.push(object);
                outcome.succeeded += 1;
            } else {
                tracing::warn!(
                    "Rejecting unstorable object for collection {}",
                    collection_id
                );
                outcome.failed += 1;
            }
        }

        tracing::info!(
            "Persisted {} objects ({} failed) into collection {}",
            outcome.succeeded,
            outcome.failed,
            collection_id
        );

        outcome
    }

    async fn objects(
        &self,
        collection_id: &str,
        range: &mut Range,
        _filter: &Filter,
    ) -> Result<Vec<Value>> {
        let all = self
            .collections
            .get(collection_id)
            .map(|rows| rows.clone())
            .unwrap_or_default();

        if !range.valid() {
            return Ok(all);
        }

        range.total = all.len() as i64;

        let first = range.first as usize;
        if first >= all.len() {
            return Ok(Vec::new());
        }
        let last = (range.last as usize).min(all.len() - 1);

        Ok(all[first..=last].to_vec())
    }

    async fn object(
        &self,
        collection_id: &str,
        object_id: &str,
        _filter: &Filter,
    ) -> Result<Vec<Value>> {
        let matches = self
            .collections
            .get(collection_id)
            .map(|rows| {
                rows.iter()
                    .filter(|object| {
                        object.get("id").and_then(Value::as_str) == Some(object_id)
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(matches)
    }
}
