use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_COMPLETE: &str = "complete";

/// Progress record for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub id: String,
    pub status: String,
    pub total_count: u64,
    pub success_count: u64,
    pub failure_count: u64,
    pub pending_count: u64,
}

impl Status {
    /// Creates the initial pending record for a bundle of `total` objects.
    /// A submission with nothing to ingest is a caller bug, not a record.
    pub fn new(total: usize) -> Result<Status> {
        if total == 0 {
            anyhow::bail!("unable to create status: object count is 0");
        }

        Ok(Status {
            id: Uuid::new_v4().to_string(),
            status: STATUS_PENDING.to_string(),
            total_count: total as u64,
            success_count: 0,
            failure_count: 0,
            pending_count: total as u64,
        })
    }

    /// Applies an aggregate persistence outcome (one call per bundle).
    pub fn record(&mut self, succeeded: u64, failed: u64) {
        self.success_count += succeeded;
        self.failure_count += failed;
        self.recompute();
    }

    /// Re-establishes the count invariant and the derived label.
    pub fn recompute(&mut self) {
        self.pending_count = self
            .total_count
            .saturating_sub(self.success_count + self.failure_count);

        self.status = if self.pending_count == 0 {
            STATUS_COMPLETE.to_string()
        } else {
            STATUS_PENDING.to_string()
        };
    }

    pub fn complete(&self) -> bool {
        self.pending_count == 0
    }
}
