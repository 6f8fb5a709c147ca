//! Availability check handler.

use axum::Json;
use axum::extract::State;

use tablehub_service::AvailabilityReport;

use crate::dto::request::{CheckAvailabilityRequest, trimmed};
use crate::error::ApiError;
use crate::extractors::{ApiJson, parse_date_field, parse_time_slot_field, party_size_hint};
use crate::state::AppState;

const FAILURE_MESSAGE: &str = "Failed to check availability";

/// POST /api/bookings/check-availability
pub async fn check_availability(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CheckAvailabilityRequest>,
) -> Result<Json<AvailabilityReport>, ApiError> {
    let (Some(date), Some(time_slot)) = (trimmed(req.date), trimmed(req.time_slot)) else {
        return Err(ApiError::bad_request("Date and timeSlot are required"));
    };
    let date = parse_date_field(&date)?;
    let time_slot = parse_time_slot_field(&time_slot)?;

    let report = state
        .availability
        .check(date, time_slot, party_size_hint(req.party_size))
        .await
        .map_err(|e| ApiError::from_app(e, FAILURE_MESSAGE))?;

    Ok(Json(report))
}
