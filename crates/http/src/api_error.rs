//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and status
//! code. Handlers return `Result<T, ApiError>`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use folio_lookup_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` variant logs the real error server-side and returns
/// a static message to the client.
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request: malformed parameter.
    BadRequest(String),
    /// 403 Forbidden: cache administration from a non-loopback caller.
    Forbidden(String),
    /// 404 Not Found: unknown location or missing resource.
    NotFound(String),
    /// 422 Unprocessable Entity: folio not encodable in the symbology.
    UnprocessableEntity(String),
    /// 500 Internal Server Error: details logged, not exposed.
    Internal(anyhow::Error),
    /// 503 Service Unavailable: the sheet export could not be reached.
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_owned())
            },
            Self::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::UnknownLocation(name) => Self::NotFound(format!("unknown location '{name}'")),
            ServiceError::Barcode(_) if err.is_invalid_input() => {
                Self::UnprocessableEntity(err.to_string())
            },
            ServiceError::Sheet(_) => Self::ServiceUnavailable(err.to_string()),
            _ => Self::Internal(err.into()),
        }
    }
}
