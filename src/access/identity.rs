use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::errors::ApiError;

/// The authenticated caller, passed explicitly into handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
}

/// Decodes a Basic `Authorization` header value into an identity.
///
/// Only the user name matters here; password verification belongs to the
/// external credential store and is not this system's concern.
pub fn identity_from_basic(header: Option<&str>) -> Result<Identity, ApiError> {
    let header =
        header.ok_or_else(|| ApiError::Unauthorized("missing Authorization header".to_string()))?;

    let encoded = header
        .strip_prefix("Basic ")
        .ok_or_else(|| ApiError::Unauthorized("unsupported authorization scheme".to_string()))?;

    let decoded = STANDARD
        .decode(encoded.trim())
        .map_err(|_| ApiError::Unauthorized("malformed basic credentials".to_string()))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| ApiError::Unauthorized("malformed basic credentials".to_string()))?;

    let user = decoded.split(':').next().unwrap_or("");
    if user.is_empty() {
        return Err(ApiError::Unauthorized("empty user name".to_string()));
    }

    Ok(Identity {
        user: user.to_string(),
    })
}

#[async_trait]
impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        identity_from_basic(header)
    }
}
