//! Media Type Negotiation
//!
//! Constants and helpers for the two media types the exchange protocol speaks:
//! the exchange envelope type (status resources, errors) and the intelligence
//! object type (bundles and objects). Headers may carry a version parameter
//! (`; version=2.0`) which is ignored during comparison.

use axum::Json;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::errors::ApiError;

/// Media type of the exchange protocol itself (status resources, error bodies).
pub const EXCHANGE_CONTENT_TYPE: &str = "application/vnd.oasis.taxii+json";
/// Media type of intelligence-object payloads (bundles, object listings).
pub const OBJECT_CONTENT_TYPE: &str = "application/vnd.oasis.stix+json";

/// Strips any parameters (e.g. `; version=2.0`) from a media type header value.
pub fn split_media_type(header: &str) -> &str {
    header.split(';').next().unwrap_or("").trim()
}

fn header_media_type<'a>(headers: &'a HeaderMap, name: &axum::http::HeaderName) -> &'a str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(split_media_type)
        .unwrap_or("")
}

/// Checks the `Accept` header against the expected media type.
pub fn verify_accept(headers: &HeaderMap, expected: &str) -> Result<(), ApiError> {
    let found = header_media_type(headers, &ACCEPT);
    if found == expected {
        return Ok(());
    }
    Err(ApiError::UnsupportedMediaType(format!(
        "invalid 'Accept' header: {found:?}"
    )))
}

/// Checks the `Content-Type` header against the expected media type.
pub fn verify_content_type(headers: &HeaderMap, expected: &str) -> Result<(), ApiError> {
    let found = header_media_type(headers, &CONTENT_TYPE);
    if found == expected {
        return Ok(());
    }
    Err(ApiError::UnsupportedMediaType(format!(
        "invalid 'Content-Type' header: {found:?}"
    )))
}

/// Serializes `body` as JSON and stamps the protocol media type on the response.
pub fn write_content<T: Serialize>(
    status: StatusCode,
    content_type: &'static str,
    body: &T,
) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_media_type_drops_version() {
        assert_eq!(
            split_media_type("application/vnd.oasis.taxii+json; version=2.0"),
            EXCHANGE_CONTENT_TYPE
        );
        assert_eq!(split_media_type("application/json"), "application/json");
        assert_eq!(split_media_type(""), "");
    }

    #[test]
    fn test_verify_accept() {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(EXCHANGE_CONTENT_TYPE));
        assert!(verify_accept(&headers, EXCHANGE_CONTENT_TYPE).is_ok());
        assert!(verify_accept(&headers, OBJECT_CONTENT_TYPE).is_err());

        let empty = HeaderMap::new();
        assert!(verify_accept(&empty, EXCHANGE_CONTENT_TYPE).is_err());
    }

    #[test]
    fn test_verify_accept_with_version_parameter() {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.oasis.taxii+json; version=2.0"),
        );
        assert!(verify_accept(&headers, EXCHANGE_CONTENT_TYPE).is_ok());
    }

    #[test]
    fn test_verify_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(OBJECT_CONTENT_TYPE));
        assert!(verify_content_type(&headers, OBJECT_CONTENT_TYPE).is_ok());
        assert!(verify_content_type(&headers, EXCHANGE_CONTENT_TYPE).is_err());
    }
}
