//! Booking entity model.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use tablehub_core::types::TimeSlot;

use super::status::BookingStatus;

/// A persisted table reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    /// Unique booking identifier.
    pub id: Uuid,
    /// Calendar date of the reservation.
    pub date: NaiveDate,
    /// Start of the reservation in venue-local time.
    pub time_slot: TimeSlot,
    /// Number of guests.
    pub party_size: i32,
    /// Guest name.
    pub name: String,
    /// Guest email address.
    pub email: String,
    /// Guest phone number.
    pub phone: String,
    /// Special requests; empty when none were given.
    pub notes: String,
    /// Current status.
    pub status: BookingStatus,
    /// When the booking was created. Never changes afterwards.
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Materialise a new record with a fresh identifier.
    pub fn from_new(new: NewBooking, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: new.date,
            time_slot: new.time_slot,
            party_size: new.party_size,
            name: new.name,
            email: new.email,
            phone: new.phone,
            notes: new.notes,
            status: new.status,
            created_at,
        }
    }

    /// Wall-clock instant the party is seated.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.time_slot.on(self.date)
    }

    /// Seats this booking holds while it occupies a table.
    pub fn seats(&self) -> u32 {
        u32::try_from(self.party_size).unwrap_or(0)
    }
}

/// Data required to create a new booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBooking {
    /// Calendar date.
    pub date: NaiveDate,
    /// Start time.
    pub time_slot: TimeSlot,
    /// Number of guests (at least 1).
    pub party_size: i32,
    /// Guest name.
    pub name: String,
    /// Guest email address.
    pub email: String,
    /// Guest phone number.
    pub phone: String,
    /// Special requests.
    pub notes: String,
    /// Initial status.
    pub status: BookingStatus,
}
