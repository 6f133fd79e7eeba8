use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
};
use roomsync_core::{RoomId, ScheduleId};
use roomsync_core::models::schedule::{
    CreateScheduleRequest, Schedule, UpdateScheduleRequest,
};
use serde::Deserialize;

use crate::middleware::{auth, error_handling::AppError};
use crate::ApiState;

/// Query parameters for the schedule listing endpoint. Both filters are
/// optional and compose with AND; with neither, the full canonical list
/// comes back.
#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    /// Restrict to one room
    pub room_id: Option<RoomId>,

    /// Case-insensitive title substring
    pub search: Option<String>,
}

#[axum::debug_handler]
pub async fn list_schedules(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<ScheduleQuery>,
) -> Json<Vec<Schedule>> {
    Json(
        state
            .store
            .filter_schedules(query.room_id, query.search.as_deref()),
    )
}

#[axum::debug_handler]
pub async fn get_schedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<ScheduleId>,
) -> Result<Json<Schedule>, AppError> {
    Ok(Json(state.store.get_schedule(id)?))
}

/// Books a meeting. The authenticated caller becomes `created_by`; a 409
/// response names the blocking schedule when the requested time is taken.
#[axum::debug_handler]
pub async fn create_schedule(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateScheduleRequest>,
) -> Result<Json<Schedule>, AppError> {
    let user = auth::current_user(&state, &headers)?;
    Ok(Json(state.store.create_schedule(payload, user.id)?))
}

#[axum::debug_handler]
pub async fn update_schedule(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<ScheduleId>,
    Json(payload): Json<UpdateScheduleRequest>,
) -> Result<Json<Schedule>, AppError> {
    auth::current_user(&state, &headers)?;
    Ok(Json(state.store.update_schedule(id, payload)?))
}

#[axum::debug_handler]
pub async fn delete_schedule(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<ScheduleId>,
) -> Result<StatusCode, AppError> {
    auth::current_user(&state, &headers)?;
    state.store.delete_schedule(id)?;
    Ok(StatusCode::NO_CONTENT)
}
