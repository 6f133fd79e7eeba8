use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/schedules", get(handlers::schedules::list_schedules))
        .route("/api/schedules", post(handlers::schedules::create_schedule))
        .route("/api/schedules/:id", get(handlers::schedules::get_schedule))
        .route(
            "/api/schedules/:id",
            put(handlers::schedules::update_schedule),
        )
        .route(
            "/api/schedules/:id",
            delete(handlers::schedules::delete_schedule),
        )
}
