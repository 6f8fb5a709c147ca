//! Access log middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, info, warn};

const HEALTH_PATH: &str = "/api/health";

/// Emits one event per request with method, path, status and latency.
///
/// Server errors log at `warn`, health probes at `debug`, the rest at `info`.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    if response.status().is_server_error() {
        warn!(%method, %path, status, latency_ms, "request failed");
    } else if path == HEALTH_PATH {
        debug!(%method, %path, status, latency_ms, "health probe");
    } else {
        info!(%method, %path, status, latency_ms, "request handled");
    }

    response
}
