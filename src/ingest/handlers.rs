use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Extension, Path};
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;

use crate::access::{AccessResolver, Identity};
use crate::bundle::{Bundle, SchemaValidator};
use crate::config::ServerConfig;
use crate::errors::ApiError;
use crate::media::{
    EXCHANGE_CONTENT_TYPE, OBJECT_CONTENT_TYPE, verify_accept, verify_content_type, write_content,
};
use crate::objects::ObjectStore;
use crate::status::{Status, StatusStore};

use super::pipeline::spawn_persistence;

/// `POST /collections/:collection_id/objects` — bundle submission.
///
/// Everything up to and including status creation happens on the response
/// path; persistence is handed to a detached task after the `202` is built.
pub async fn handle_submit_objects(
    Path(collection_id): Path<String>,
    identity: Identity,
    Extension(config): Extension<Arc<ServerConfig>>,
    Extension(access): Extension<Arc<dyn AccessResolver>>,
    Extension(validator): Extension<Arc<dyn SchemaValidator>>,
    Extension(ledger): Extension<Arc<dyn StatusStore>>,
    Extension(store): Extension<Arc<dyn ObjectStore>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    tracing::debug!(
        "Submission handler called for collection {} by {}",
        collection_id,
        identity.user
    );

    verify_accept(&headers, EXCHANGE_CONTENT_TYPE)?;
    verify_content_type(&headers, OBJECT_CONTENT_TYPE)?;

    if body.len() as u64 > config.max_content_length {
        return Err(ApiError::RequestTooLarge {
            length: body.len() as u64,
            max: config.max_content_length,
        });
    }

    if !access.resolve(&identity.user, &collection_id).can_write {
        return Err(ApiError::Forbidden(
            "unauthorized to write to collection".to_string(),
        ));
    }

    let bundle = Bundle::decode(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    bundle
        .validate(validator.as_ref())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let status = Status::new(bundle.objects.len()).map_err(ApiError::internal)?;

    ledger.create(status.clone()).await.map_err(|e| {
        tracing::error!("Failed to create status row: {}", e);
        ApiError::Internal("unable to store status resource".to_string())
    })?;

    tracing::info!(
        "Accepted bundle of {} objects for collection {} (status {})",
        status.total_count,
        collection_id,
        status.id
    );

    spawn_persistence(store, ledger, collection_id, bundle.objects, status.clone());

    Ok(write_content(
        StatusCode::ACCEPTED,
        EXCHANGE_CONTENT_TYPE,
        &status,
    ))
}
