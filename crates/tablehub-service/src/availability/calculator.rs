//! Conflict and capacity calculator.
//!
//! Every booking holds its seats over the half-open interval
//! `[start, start + occupancy)`. A candidate conflicts with a booking when
//! the two intervals share an instant; intervals that only touch at an
//! endpoint do not conflict.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::Serialize;

use tablehub_core::types::TimeSlot;
use tablehub_entity::booking::Booking;

use crate::settings::BookingSettings;

/// Seat availability for one candidate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityReport {
    /// Seats still free across the candidate's occupancy window.
    pub available_seats: u32,
    /// Configured venue capacity.
    pub total_capacity: u32,
    /// Seats held by bookings overlapping the candidate.
    pub occupied_seats: u32,
    /// Whether the candidate can be accepted.
    pub can_book: bool,
}

/// Whether two occupancy intervals of equal length overlap.
pub fn overlaps(a_start: NaiveDateTime, b_start: NaiveDateTime, duration: Duration) -> bool {
    a_start < b_start + duration && a_start + duration > b_start
}

/// Compute availability for a candidate at `date` `time_slot`.
///
/// Bookings whose status does not hold seats are ignored, whatever the
/// caller passed in. Without a party size the candidate is bookable when
/// any seat is free.
pub fn check_availability(
    date: NaiveDate,
    time_slot: TimeSlot,
    party_size: Option<u32>,
    existing: &[Booking],
    settings: &BookingSettings,
) -> AvailabilityReport {
    let duration = Duration::minutes(i64::from(settings.table_occupancy_duration));
    let candidate_start = time_slot.on(date);

    let occupied_seats = existing
        .iter()
        .filter(|b| b.status.occupies_seats())
        .filter(|b| overlaps(candidate_start, b.starts_at(), duration))
        .fold(0u32, |acc, b| acc.saturating_add(b.seats()));

    let available_seats = settings.total_seating_capacity.saturating_sub(occupied_seats);
    let can_book = match party_size {
        Some(size) => available_seats >= size,
        None => available_seats > 0,
    };

    AvailabilityReport {
        available_seats,
        total_capacity: settings.total_seating_capacity,
        occupied_seats,
        can_book,
    }
}
