//! JSON body extractor with a fixed rejection body.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, INVALID_BODY_MESSAGE};

/// Like [`axum::Json`], but a body that is missing, not JSON, or of the
/// wrong shape is rejected with `400 { "error": "Invalid request body" }`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(reason = %rejection.body_text(), "Rejected request body");
                Err(ApiError::bad_request(INVALID_BODY_MESSAGE))
            }
        }
    }
}
