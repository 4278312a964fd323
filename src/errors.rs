//! API Error Taxonomy
//!
//! Every failure a handler can report maps to one variant here. Converting an
//! `ApiError` into a response produces the protocol error body
//! `{title, description, http_status}` with the exchange media type, so all
//! error responses share one shape.
//!
//! Unexpected faults (panics) are recovered at the router boundary. The default
//! mapping is a 500; the legacy deployment reported panics as 404 and that
//! behavior can be kept with `--legacy-not-found`.

use std::any::Any;

use axum::Json;
use axum::http::header::{CONTENT_TYPE, WWW_AUTHENTICATE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

use crate::media::EXCHANGE_CONTENT_TYPE;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    Forbidden(String),
    #[error("{0}")]
    NotFound(String),
    #[error("content length is {length}, content length can't be bigger than {max}")]
    RequestTooLarge { length: u64, max: u64 },
    #[error("{0}")]
    RangeNotSatisfiable(String),
    #[error("{0}")]
    UnsupportedMediaType(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn internal(err: impl std::fmt::Display) -> Self {
        ApiError::Internal(err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::RequestTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::RangeNotSatisfiable(_) => StatusCode::RANGE_NOT_SATISFIABLE,
            ApiError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "Bad Request",
            ApiError::Unauthorized(_) => "Unauthorized",
            ApiError::Forbidden(_) => "Forbidden",
            ApiError::NotFound(_) => "Resource Not Found",
            ApiError::RequestTooLarge { .. } => "Request Too Large",
            ApiError::RangeNotSatisfiable(_) => "Requested Range Not Satisfiable",
            ApiError::UnsupportedMediaType(_) => "Unsupported Media Type",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }
}

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    title: String,
    description: String,
    http_status: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        tracing::error!(
            title = self.title(),
            http_status = status.as_u16(),
            "Returning error in response: {}",
            self
        );

        let body = ErrorBody {
            title: self.title().to_string(),
            description: self.to_string(),
            http_status: status.as_u16(),
        };

        let mut response = (status, Json(body)).into_response();
        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static(EXCHANGE_CONTENT_TYPE));

        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                WWW_AUTHENTICATE,
                HeaderValue::from_static("Basic realm=\"intel-exchange\""),
            );
        }

        response
    }
}

/// Panic responder used by the catch-panic layer: report a server error.
pub fn panic_to_internal_error(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Recovered from panic while serving request");
    ApiError::Internal("unexpected fault while serving request".to_string()).into_response()
}

/// Legacy panic responder: the original deployment reported panics as 404.
pub fn panic_to_not_found(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Recovered from panic while serving request (legacy 404 mapping)");
    ApiError::NotFound("resource not found".to_string()).into_response()
}
