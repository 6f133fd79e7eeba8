use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/rooms", get(handlers::rooms::list_rooms))
        .route("/api/rooms", post(handlers::rooms::create_room))
        .route("/api/rooms/:id", get(handlers::rooms::get_room))
        .route("/api/rooms/:id", put(handlers::rooms::update_room))
        .route("/api/rooms/:id", delete(handlers::rooms::delete_room))
        .route(
            "/api/rooms/:id/schedules",
            get(handlers::rooms::room_schedules),
        )
}
