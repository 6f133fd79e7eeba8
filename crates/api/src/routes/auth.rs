use std::sync::Arc;

use axum::{Router, routing::post};

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route("/api/auth/login", post(handlers::auth::login))
}
