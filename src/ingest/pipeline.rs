use std::sync::Arc;

use serde_json::Value;

use crate::objects::ObjectStore;
use crate::status::{Status, StatusStore};

/// Persists one bundle's objects and records the aggregate outcome.
///
/// Runs after the client has been answered: persistence failures become
/// failure counts on the status row, nothing more. The ledger update is the
/// only channel by which this unit's outcome is observable.
pub async fn persist_bundle(
    store: Arc<dyn ObjectStore>,
    ledger: Arc<dyn StatusStore>,
    collection_id: String,
    objects: Vec<Value>,
    mut status: Status,
) {
    let outcome = store.persist(&collection_id, objects).await;
    status.record(outcome.succeeded, outcome.failed);

    if let Err(e) = ledger.update(status).await {
        // Terminal: the row keeps its pending counts and pollers see no change
        tracing::error!("Failed to record ingestion outcome: {}", e);
    }
}

/// Launches the detached persistence unit.
///
/// The task owns every value it touches — no shared state with the request
/// that spawned it, which may already be gone.
pub fn spawn_persistence(
    store: Arc<dyn ObjectStore>,
    ledger: Arc<dyn StatusStore>,
    collection_id: String,
    objects: Vec<Value>,
    status: Status,
) {
    tracing::debug!(
        "Dispatching persistence of {} objects for status {}",
        objects.len(),
        status.id
    );
    tokio::spawn(persist_bundle(store, ledger, collection_id, objects, status));
}
