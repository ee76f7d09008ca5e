use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use moodring_types::api::ErrorResponse;
use thiserror::Error;

/// Handler failures surfaced to the client as `{"message": ...}`.
///
/// `Validation` is a rejected submission payload; `Store` is a failed
/// read or write against the submission log. Store errors carry the
/// endpoint's stable client-facing message; the underlying cause is
/// logged at the call site, never sent over the wire.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(&'static str),

    #[error("{0}")]
    Store(&'static str),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorResponse {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
