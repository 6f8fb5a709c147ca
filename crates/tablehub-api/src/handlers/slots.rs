//! Slot listing handler.

use axum::Json;
use axum::extract::State;

use crate::dto::request::{SlotsRequest, trimmed};
use crate::dto::response::SlotListingResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, parse_date_field, party_size_hint};
use crate::state::AppState;

const FAILURE_MESSAGE: &str = "Failed to list time slots";

/// POST /api/bookings/slots
pub async fn list_slots(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SlotsRequest>,
) -> Result<Json<SlotListingResponse>, ApiError> {
    let Some(date) = trimmed(req.date) else {
        return Err(ApiError::bad_request("Date is required"));
    };
    let date = parse_date_field(&date)?;

    let listing = state
        .availability
        .list_slots(date, party_size_hint(req.party_size))
        .await
        .map_err(|e| ApiError::from_app(e, FAILURE_MESSAGE))?;

    Ok(Json(listing.into()))
}
