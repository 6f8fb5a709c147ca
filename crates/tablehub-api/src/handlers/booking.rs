//! Booking creation handler.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use tablehub_service::booking::REQUIRED_FIELDS_MESSAGE;
use tablehub_service::{BookingRequest, CreateBookingOutcome};

use crate::dto::request::CreateBookingRequest;
use crate::dto::response::CreateBookingResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, parse_date_field, parse_time_slot_field};
use crate::state::AppState;

const FAILURE_MESSAGE: &str = "Failed to create booking";

/// POST /api/bookings/create
pub async fn create_booking(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, ApiError> {
    let req = req.normalized();
    if req.validate().is_err() {
        return Err(ApiError::bad_request(REQUIRED_FIELDS_MESSAGE));
    }

    let (
        Some(date),
        Some(time_slot),
        Some(party_size),
        Some(name),
        Some(email),
        Some(phone),
    ) = (
        req.date,
        req.time_slot,
        req.party_size,
        req.name,
        req.email,
        req.phone,
    )
    else {
        return Err(ApiError::bad_request(REQUIRED_FIELDS_MESSAGE));
    };

    let request = BookingRequest {
        date: parse_date_field(&date)?,
        time_slot: parse_time_slot_field(&time_slot)?,
        party_size: u32::try_from(party_size).unwrap_or(u32::MAX),
        name,
        email,
        phone,
        notes: req.notes.unwrap_or_default(),
    };

    let outcome = state
        .bookings
        .create(request)
        .await
        .map_err(|e| ApiError::from_app(e, FAILURE_MESSAGE))?;

    match outcome {
        CreateBookingOutcome::Created(booking) => Ok(Json(CreateBookingResponse::created(booking))),
        CreateBookingOutcome::InsufficientCapacity { available_seats } => {
            Err(ApiError::InsufficientCapacity { available_seats })
        }
    }
}
