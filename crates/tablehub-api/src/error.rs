//! Maps service outcomes and `AppError` to HTTP responses.
//!
//! Every failure body has the shape `{ "error": <message> }`. Capacity
//! conflicts add `availableSeats`. Infrastructure failures never leak their
//! cause: the cause is logged and the caller sees the endpoint's generic
//! message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use tablehub_core::error::AppError;

pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
pub const CAPACITY_MESSAGE: &str = "Not enough capacity available for this time slot";

/// Error response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Human-readable message.
    pub error: String,
    /// Free seats, present on capacity conflicts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_seats: Option<u32>,
}

/// An HTTP-facing error.
#[derive(Debug)]
pub enum ApiError {
    /// 400 with the message shown verbatim.
    BadRequest(String),
    /// 409 for a slot without enough free seats.
    InsufficientCapacity { available_seats: u32 },
    /// 500 with a generic message; the cause is only logged.
    Internal {
        message: &'static str,
        cause: AppError,
    },
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Convert a service error, using `fallback` as the body for anything
    /// that is not the caller's fault.
    pub fn from_app(err: AppError, fallback: &'static str) -> Self {
        if err.kind.is_client_error() {
            Self::BadRequest(err.message)
        } else {
            Self::Internal {
                message: fallback,
                cause: err,
            }
        }
    }

    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InsufficientCapacity { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::BadRequest(message) => {
                debug!(status = status.as_u16(), error = %message, "Request rejected");
                ErrorBody {
                    error: message,
                    available_seats: None,
                }
            }
            Self::InsufficientCapacity { available_seats } => ErrorBody {
                error: CAPACITY_MESSAGE.to_string(),
                available_seats: Some(available_seats),
            },
            Self::Internal { message, cause } => {
                error!(
                    error = %cause,
                    cause = ?std::error::Error::source(&cause),
                    "{message}"
                );
                ErrorBody {
                    error: message.to_string(),
                    available_seats: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
