use std::sync::Arc;

use axum::extract::{Extension, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;

use crate::access::Identity;
use crate::errors::ApiError;
use crate::media::{EXCHANGE_CONTENT_TYPE, verify_accept, write_content};

use super::ledger::StatusStore;

/// `GET /status/:status_id` — read-only view for pollers.
pub async fn handle_get_status(
    Path(status_id): Path<String>,
    _identity: Identity,
    Extension(ledger): Extension<Arc<dyn StatusStore>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    tracing::debug!("Status handler called for {}", status_id);

    verify_accept(&headers, EXCHANGE_CONTENT_TYPE)?;

    match ledger.status(&status_id).await.map_err(ApiError::internal)? {
        Some(status) => Ok(write_content(
            StatusCode::OK,
            EXCHANGE_CONTENT_TYPE,
            &status,
        )),
        None => Err(ApiError::NotFound(format!(
            "no status with id {status_id}"
        ))),
    }
}
