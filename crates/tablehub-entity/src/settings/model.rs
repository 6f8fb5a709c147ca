//! Stored booking settings.
//!
//! The stored record mirrors what an administrator edits: every numeric
//! policy field may be unset, and defaults are applied by the settings
//! resolver in `tablehub-service`, never here.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tablehub_core::types::{DayOfWeek, TimeSlot};

/// The singleton reservation policy record as stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookingSettingsRecord {
    /// Seats available in the venue at any instant.
    #[serde(default)]
    pub total_seating_capacity: Option<i32>,
    /// Minutes a party holds its seats from the slot start.
    #[serde(default)]
    pub table_occupancy_duration: Option<i32>,
    /// Largest party accepted in one booking.
    #[serde(default)]
    pub max_party_size: Option<i32>,
    /// Minutes between offered slot start times.
    #[serde(default)]
    pub time_slot_duration: Option<i32>,
    /// How many days ahead guests may book.
    #[serde(default)]
    pub advance_booking_days: Option<i32>,
    /// Recurring weekly closures.
    #[serde(default)]
    pub closed_weekdays: Vec<DayOfWeek>,
    /// Specific closed dates.
    #[serde(default)]
    pub blackout_dates: Vec<BlackoutDate>,
    /// Booking window per weekday.
    #[serde(default)]
    pub booking_hours: Vec<BookingHours>,
}

/// A single date on which no bookings are taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BlackoutDate {
    /// The closed date.
    pub date: NaiveDate,
    /// Why the venue is closed (e.g. "Christmas", "Private event").
    #[serde(default)]
    pub reason: Option<String>,
}

/// Booking window for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingHours {
    /// Weekday this entry applies to (Sunday = 0).
    pub day_of_week: DayOfWeek,
    /// First bookable start time.
    #[serde(default)]
    pub opening_time: Option<TimeSlot>,
    /// Closing time; never itself an offered start.
    #[serde(default)]
    pub closing_time: Option<TimeSlot>,
    /// Closed all day.
    #[serde(default)]
    pub is_closed: bool,
}

impl BookingHours {
    /// Opening and closing times when the entry describes an open window.
    pub fn window(&self) -> Option<(TimeSlot, TimeSlot)> {
        if self.is_closed {
            return None;
        }
        Some((self.opening_time?, self.closing_time?))
    }
}
