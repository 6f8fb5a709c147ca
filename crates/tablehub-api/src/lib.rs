//! # tablehub-api
//!
//! HTTP API layer for TableHub built on Axum.
//!
//! Provides the booking endpoints, the JSON body extractor, DTOs, the
//! mapping from service errors to response bodies, and the middleware stack
//! (CORS, compression, tracing, request logging, timeouts).

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
