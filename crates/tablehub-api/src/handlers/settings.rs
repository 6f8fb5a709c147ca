//! Public booking settings handler.

use axum::Json;
use axum::extract::State;

use tablehub_service::CalendarPolicy;

use crate::dto::response::SettingsResponse;
use crate::error::ApiError;
use crate::state::AppState;

const FAILURE_MESSAGE: &str = "Failed to load booking settings";

/// GET /api/bookings/settings
pub async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, ApiError> {
    let settings = state
        .availability
        .settings()
        .await
        .map_err(|e| ApiError::from_app(e, FAILURE_MESSAGE))?;

    let today = state.availability.today();
    let until = CalendarPolicy::new(&settings, today).last_bookable_date();
    Ok(Json(SettingsResponse::new(&settings, today, until)))
}
