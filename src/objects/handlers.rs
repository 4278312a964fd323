use std::sync::Arc;

use axum::extract::{Extension, Path, Query};
use axum::http::header::{CONTENT_RANGE, RANGE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::Response;

use crate::access::Identity;
use crate::bundle::Bundle;
use crate::errors::ApiError;
use crate::media::{OBJECT_CONTENT_TYPE, verify_accept, write_content};
use crate::pagination::Range;

use super::store::ObjectStore;
use super::types::Filter;

/// `GET /collections/:collection_id/objects` — windowed listing.
pub async fn handle_get_objects(
    Path(collection_id): Path<String>,
    _identity: Identity,
    Query(filter): Query<Filter>,
    Extension(store): Extension<Arc<dyn ObjectStore>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    tracing::debug!("Objects listing handler called for {}", collection_id);

    verify_accept(&headers, OBJECT_CONTENT_TYPE)?;

    let header_value = headers
        .get(RANGE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let mut range =
        Range::parse(header_value).map_err(|e| ApiError::RangeNotSatisfiable(e.to_string()))?;

    let objects = store
        .objects(&collection_id, &mut range, &filter)
        .await
        .map_err(ApiError::internal)?;

    if objects.is_empty() {
        return Err(ApiError::NotFound(
            "no objects defined in this collection".to_string(),
        ));
    }

    let envelope = Bundle::wrap(objects);

    if range.valid() {
        let mut response =
            write_content(StatusCode::PARTIAL_CONTENT, OBJECT_CONTENT_TYPE, &envelope);
        let value = HeaderValue::from_str(&range.to_string()).map_err(ApiError::internal)?;
        response.headers_mut().insert(CONTENT_RANGE, value);
        Ok(response)
    } else {
        Ok(write_content(StatusCode::OK, OBJECT_CONTENT_TYPE, &envelope))
    }
}

/// `GET /collections/:collection_id/objects/:object_id` — single object.
pub async fn handle_get_object(
    Path((collection_id, object_id)): Path<(String, String)>,
    _identity: Identity,
    Query(filter): Query<Filter>,
    Extension(store): Extension<Arc<dyn ObjectStore>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    tracing::debug!(
        "Object handler called for {} in {}",
        object_id,
        collection_id
    );

    verify_accept(&headers, OBJECT_CONTENT_TYPE)?;

    let objects = store
        .object(&collection_id, &object_id, &filter)
        .await
        .map_err(ApiError::internal)?;

    if objects.is_empty() {
        return Err(ApiError::NotFound(format!(
            "no object with id {object_id} in this collection"
        )));
    }

    let envelope = Bundle::wrap(objects);
    Ok(write_content(StatusCode::OK, OBJECT_CONTENT_TYPE, &envelope))
}
