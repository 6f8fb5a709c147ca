//! Parsers for individual request fields.

use chrono::NaiveDate;

use tablehub_core::types::{TimeSlot, parse_booking_date};

use crate::error::ApiError;

/// Parses the `date` field: a plain ISO date or an RFC 3339 timestamp.
pub fn parse_date_field(raw: &str) -> Result<NaiveDate, ApiError> {
    parse_booking_date(raw).ok_or_else(|| ApiError::bad_request("Invalid date"))
}

/// Parses the `timeSlot` field as `"HH:MM"`.
pub fn parse_time_slot_field(raw: &str) -> Result<TimeSlot, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("Invalid timeSlot format"))
}

/// Optional party size: zero or negative counts as not given, values past
/// `u32::MAX` saturate. A negative party can never be seated, so it gets the
/// same treatment as zero.
pub fn party_size_hint(raw: Option<i64>) -> Option<u32> {
    raw.filter(|p| *p > 0)
        .map(|p| u32::try_from(p).unwrap_or(u32::MAX))
}
