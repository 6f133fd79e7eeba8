//! # RoomSync API
//!
//! Web server for the RoomSync meeting-room reservation service. It
//! exposes the booking core as a JSON REST API.
//!
//! ## Architecture
//!
//! - **Routes**: endpoint and URL structure
//! - **Handlers**: request processing logic
//! - **Middleware**: identity resolution, role gating, error mapping
//! - **Config**: environment configuration
//!
//! The HTTP layer holds no business rules of its own: validation, conflict
//! detection, and mutation all happen inside `roomsync-store`, and this
//! crate only translates between HTTP and the domain types.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement endpoint logic
pub mod handlers;
/// Identity helpers and error mapping
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use eyre::Result;
use roomsync_store::BookingStore;
use roomsync_store::users::UserDirectory;
use tokio::net::TcpListener;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state handed to every request handler.
pub struct ApiState {
    /// Room catalog and reservation set
    pub store: BookingStore,
    /// Fixed user table for login and role gating
    pub users: UserDirectory,
}

/// Builds the application router over the given state.
///
/// Split out of [`start_server`] so integration tests can drive the exact
/// router the binary serves.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Login collaborator
        .merge(routes::auth::routes())
        // Room catalog endpoints
        .merge(routes::rooms::routes())
        // Reservation endpoints
        .merge(routes::schedules::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server: installs logging, builds the router, applies
/// CORS/trace/timeout layers, and serves until shutdown.
pub async fn start_server(
    config: config::ApiConfig,
    store: BookingStore,
    users: UserDirectory,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState { store, users });
    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    let app = app
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout,
        )));

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
