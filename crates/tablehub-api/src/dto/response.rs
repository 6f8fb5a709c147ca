//! Response DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tablehub_entity::booking::Booking;
use tablehub_entity::settings::BookingHours;
use tablehub_service::{BookingSettings, SlotListing};

pub const BOOKING_CREATED_MESSAGE: &str = "Booking created successfully";

/// Successful create-booking response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub booking: Booking,
    pub message: String,
}

impl CreateBookingResponse {
    pub fn created(booking: Booking) -> Self {
        Self {
            success: true,
            booking,
            message: BOOKING_CREATED_MESSAGE.to_string(),
        }
    }
}

/// One slot in a slot listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotResponse {
    pub time_slot: String,
    pub available_seats: u32,
    pub can_book: bool,
}

/// POST /api/bookings/slots response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotListingResponse {
    pub date: NaiveDate,
    pub closed: bool,
    /// Machine-readable closure code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Human-readable closure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub slots: Vec<SlotResponse>,
}

impl From<SlotListing> for SlotListingResponse {
    fn from(listing: SlotListing) -> Self {
        Self {
            date: listing.date,
            closed: listing.closure.is_some(),
            reason: listing.closure.as_ref().map(|c| c.code().to_string()),
            description: listing.closure.as_ref().map(|c| c.to_string()),
            slots: listing
                .slots
                .into_iter()
                .map(|s| SlotResponse {
                    time_slot: s.time_slot.to_string(),
                    available_seats: s.report.available_seats,
                    can_book: s.report.can_book,
                })
                .collect(),
        }
    }
}

/// A blackout date in the public settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutDateResponse {
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Booking hours for one weekday in the public settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingHoursResponse {
    pub day_of_week: u8,
    pub opening_time: Option<String>,
    pub closing_time: Option<String>,
    pub is_closed: bool,
}

impl From<&BookingHours> for BookingHoursResponse {
    fn from(hours: &BookingHours) -> Self {
        Self {
            day_of_week: hours.day_of_week.value(),
            opening_time: hours.opening_time.map(|t| t.to_string()),
            closing_time: hours.closing_time.map(|t| t.to_string()),
            is_closed: hours.is_closed,
        }
    }
}

/// GET /api/bookings/settings response: what a booking form needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsResponse {
    pub max_party_size: u32,
    pub time_slot_duration: u32,
    pub advance_booking_days: u32,
    pub closed_weekdays: Vec<u8>,
    pub blackout_dates: Vec<BlackoutDateResponse>,
    pub booking_hours: Vec<BookingHoursResponse>,
    /// First bookable date (today).
    pub bookable_from: NaiveDate,
    /// Last bookable date.
    pub bookable_until: NaiveDate,
}

impl SettingsResponse {
    pub fn new(settings: &BookingSettings, bookable_from: NaiveDate, bookable_until: NaiveDate) -> Self {
        Self {
            max_party_size: settings.max_party_size,
            time_slot_duration: settings.time_slot_duration,
            advance_booking_days: settings.advance_booking_days,
            closed_weekdays: settings.closed_weekdays.iter().map(|d| d.value()).collect(),
            blackout_dates: settings
                .blackout_dates
                .iter()
                .map(|(date, reason)| BlackoutDateResponse {
                    date: *date,
                    reason: reason.clone(),
                })
                .collect(),
            booking_hours: settings.booking_hours.iter().map(Into::into).collect(),
            bookable_from,
            bookable_until,
        }
    }
}

/// GET /api/health response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub storage: String,
}
