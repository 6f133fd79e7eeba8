//! # Identity Helpers
//!
//! Resolves the calling user and enforces role gating. The booking core
//! performs no role checks itself; any permission decision lives here, in
//! the calling layer.
//!
//! There is no session store: a client authenticates via the login
//! endpoint once and then identifies itself on each request with the
//! `x-user-id` header, which is resolved against the fixed user table.

use axum::http::HeaderMap;
use roomsync_core::errors::BookingError;
use roomsync_core::models::user::User;

use crate::{ApiState, middleware::error_handling::AppError};

/// Header carrying the caller's user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Resolves the calling user from the `x-user-id` header.
///
/// Fails with an authentication error when the header is missing,
/// malformed, or names a user outside the fixed table.
pub fn current_user(state: &ApiState, headers: &HeaderMap) -> Result<User, AppError> {
    let raw = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError(BookingError::Authentication(format!(
                "missing {} header",
                USER_ID_HEADER
            )))
        })?;

    let id = raw.parse().map_err(|_| {
        AppError(BookingError::Authentication(format!(
            "malformed {} header",
            USER_ID_HEADER
        )))
    })?;

    state
        .users
        .get(id)
        .ok_or_else(|| AppError(BookingError::Authentication(format!("unknown user {}", id))))
}

/// Admin gate for catalog mutations.
pub fn require_admin(state: &ApiState, headers: &HeaderMap) -> Result<User, AppError> {
    let user = current_user(state, headers)?;
    if !user.role.is_admin() {
        return Err(AppError(BookingError::Authorization(
            "administrator role required".to_string(),
        )));
    }
    Ok(user)
}
