//! Status Ledger Tests
//!
//! Exercises the count invariant on every mutation path and the in-memory
//! ledger operations (create, update, read).

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::status::types::{STATUS_COMPLETE, STATUS_PENDING};
    use crate::status::{MemoryStatusLedger, Status, StatusStore};

    #[test]
    fn test_new_status_starts_pending() {
        let status = Status::new(3).unwrap();
        assert_eq!(status.status, STATUS_PENDING);
        assert_eq!(status.total_count, 3);
        assert_eq!(status.success_count, 0);
        assert_eq!(status.failure_count, 0);
        assert_eq!(status.pending_count, 3);
    }

    #[test]
    fn test_new_status_rejects_zero_objects() {
        assert!(Status::new(0).is_err());
    }

    #[test]
    fn test_record_keeps_invariant() {
        let mut status = Status::new(5).unwrap();

        status.record(1, 1);
        assert_eq!(
            status.pending_count,
            status.total_count - status.success_count - status.failure_count
        );
        assert_eq!(status.pending_count, 3);
        assert_eq!(status.status, STATUS_PENDING);

        status.record(3, 0);
        assert_eq!(status.pending_count, 0);
        assert_eq!(status.status, STATUS_COMPLETE);
        assert!(status.complete());
    }

    #[test]
    fn test_recompute_derives_label_from_counts() {
        let mut status = Status::new(3).unwrap();
        status.success_count = 2;
        status.failure_count = 1;
        status.recompute();

        assert_eq!(status.pending_count, 0);
        assert_eq!(status.status, STATUS_COMPLETE);
    }

    #[tokio::test]
    async fn test_ledger_create_and_read() {
        let ledger = MemoryStatusLedger::new();
        let status = Status::new(3).unwrap();

        ledger.create(status.clone()).await.unwrap();

        let row = ledger.status(&status.id).await.unwrap();
        assert_eq!(row, Some(status));
    }

    #[tokio::test]
    async fn test_ledger_read_unknown_id() {
        let ledger = MemoryStatusLedger::new();
        let row = ledger.status("missing").await.unwrap();
        assert!(row.is_none());
    }

    #[tokio::test]
    async fn test_ledger_update_recomputes_counts() {
        let ledger = MemoryStatusLedger::new();
        let mut status = Status::new(3).unwrap();
        ledger.create(status.clone()).await.unwrap();

        // The ledger re-establishes the invariant even if the caller did not
        status.success_count = 2;
        status.failure_count = 1;
        ledger.update(status.clone()).await.unwrap();

        let row = ledger.status(&status.id).await.unwrap().unwrap();
        assert_eq!(row.pending_count, 0);
        assert_eq!(row.status, STATUS_COMPLETE);
    }

    #[tokio::test]
    async fn test_ledger_update_unknown_row_fails() {
        let ledger = MemoryStatusLedger::new();
        let status = Status::new(1).unwrap();

        let result = ledger.update(status).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_ledger_independent_rows_update_concurrently() {
        let ledger = Arc::new(MemoryStatusLedger::new());

        let mut statuses = Vec::new();
        for _ in 0..8 {
            let status = Status::new(4).unwrap();
            ledger.create(status.clone()).await.unwrap();
            statuses.push(status);
        }

        let mut handles = Vec::new();
        for mut status in statuses.clone() {
            let ledger = ledger.clone();
            handles.push(tokio::spawn(async move {
                status.record(4, 0);
                ledger.update(status).await.unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        for status in statuses {
            let row = ledger.status(&status.id).await.unwrap().unwrap();
            assert!(row.complete());
            assert_eq!(row.success_count, 4);
        }
    }
}
