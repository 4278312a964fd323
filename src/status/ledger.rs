use anyhow::Result;
use async_trait::async_trait;
use dashmap::DashMap;

use super::types::Status;

/// Storage collaborator for status rows.
///
/// Each row is owned by the single ingestion task that created it, so there is
/// no cross-task contention on a given id. Implementations must still support
/// independent concurrent updates to different rows without global
/// serialization.
#[async_trait]
pub trait StatusStore: Send + Sync {
    /// Persists the initial pending record. Failures propagate: this runs on
    /// the synchronous response path.
    async fn create(&self, status: Status) -> Result<()>;

    /// Recomputes the count invariant and rewrites the record.
    async fn update(&self, status: Status) -> Result<()>;

    /// Reads a row. `None` means no submission with that id exists.
    async fn status(&self, id: &str) -> Result<Option<Status>>;
}

/// In-memory ledger keyed by status id. `DashMap` gives per-key atomic
/// read-modify-write, which is all the row-ownership model needs.
pub struct MemoryStatusLedger {
    rows: DashMap<String, Status>,
}

impl MemoryStatusLedger {
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Default for MemoryStatusLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatusStore for MemoryStatusLedger {
    async fn create(&self, status: Status) -> Result<()> {
        tracing::debug!("Creating status row {}", status.id);
        self.rows.insert(status.id.clone(), status);
        Ok(())
    }

    async fn update(&self, mut status: Status) -> Result<()> {
        status.recompute();

        match self.rows.get_mut(&status.id) {
            Some(mut row) => {
                tracing::debug!(
                    "Updating status row {}: {} succeeded, {} failed, {} pending",
                    status.id,
                    status.success_count,
                    status.failure_count,
                    status.pending_count
                );
                *row = status;
                Ok(())
            }
            None => anyhow::bail!("no status row with id {}", status.id),
        }
    }

    async fn status(&self, id: &str) -> Result<Option<Status>> {
        Ok(self.rows.get(id).map(|row| row.clone()))
    }
}
