//! Route definitions for the TableHub HTTP API.
//!
//! All routes are mounted under `/api`. The router receives `AppState` and
//! passes it to all handlers via Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(booking_routes())
        .merge(health_routes());

    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TimeoutLayer::new(timeout))
        .layer(CompressionLayer::new().gzip(true))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(request_logging))
        .with_state(state)
}

/// Availability, booking creation, slot listing and public settings
fn booking_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/bookings/check-availability",
            post(handlers::availability::check_availability),
        )
        .route("/bookings/create", post(handlers::booking::create_booking))
        .route("/bookings/slots", post(handlers::slots::list_slots))
        .route("/bookings/settings", get(handlers::settings::get_settings))
}

/// Liveness and storage status
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
