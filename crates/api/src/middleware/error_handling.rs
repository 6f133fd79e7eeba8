//! # Error Handling
//!
//! Maps domain errors to HTTP status codes and JSON error responses so
//! every endpoint fails the same way. Callers distinguish validation
//! problems (400) from booking conflicts (409) and stale references
//! (404); only `Internal` surfaces as a 500.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use roomsync_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// Wraps a domain [`BookingError`] and implements `IntoResponse`, so
/// handlers can return `Result<_, AppError>` and use `?` throughout.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            BookingError::Authentication(_) => StatusCode::UNAUTHORIZED,
            BookingError::Authorization(_) => StatusCode::FORBIDDEN,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Internal(err))
    }
}
