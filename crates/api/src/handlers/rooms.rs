use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use roomsync_core::RoomId;
use roomsync_core::models::room::{CreateRoomRequest, Room, UpdateRoomRequest};
use roomsync_core::models::schedule::Schedule;

use crate::middleware::{auth, error_handling::AppError};
use crate::ApiState;

#[axum::debug_handler]
pub async fn list_rooms(State(state): State<Arc<ApiState>>) -> Json<Vec<Room>> {
    Json(state.store.list_rooms())
}

#[axum::debug_handler]
pub async fn get_room(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<RoomId>,
) -> Result<Json<Room>, AppError> {
    Ok(Json(state.store.get_room(id)?))
}

/// The booking view: every schedule for one room, descending by start.
#[axum::debug_handler]
pub async fn room_schedules(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<RoomId>,
) -> Result<Json<Vec<Schedule>>, AppError> {
    // 404 on unknown rooms rather than an empty list
    state.store.get_room(id)?;
    Ok(Json(state.store.schedules_by_room(id)))
}

#[axum::debug_handler]
pub async fn create_room(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateRoomRequest>,
) -> Result<Json<Room>, AppError> {
    auth::require_admin(&state, &headers)?;
    Ok(Json(state.store.create_room(payload)?))
}

#[axum::debug_handler]
pub async fn update_room(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<RoomId>,
    Json(payload): Json<UpdateRoomRequest>,
) -> Result<Json<Room>, AppError> {
    auth::require_admin(&state, &headers)?;
    Ok(Json(state.store.update_room(id, payload)?))
}

#[axum::debug_handler]
pub async fn delete_room(
    State(state): State<Arc<ApiState>>,
    headers: HeaderMap,
    Path(id): Path<RoomId>,
) -> Result<StatusCode, AppError> {
    auth::require_admin(&state, &headers)?;
    state.store.delete_room(id)?;
    Ok(StatusCode::NO_CONTENT)
}
