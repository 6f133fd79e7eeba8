use std::sync::Arc;

use axum::{Json, extract::State};
use roomsync_core::models::user::{LoginRequest, User};

use crate::{ApiState, middleware::error_handling::AppError};

/// Verifies credentials against the fixed user table and returns the
/// user's identity and role. There is no server-side session; the caller
/// keeps the returned id and presents it on later requests.
#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<User>, AppError> {
    let user = state.users.authenticate(&payload.username, &payload.password)?;
    tracing::debug!(user = user.id, "login succeeded");
    Ok(Json(user))
}
