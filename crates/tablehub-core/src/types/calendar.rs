//! Calendar conventions shared by settings, slot generation, and bookings.
//!
//! Weekdays are numbered Sunday = 0 through Saturday = 6 everywhere in
//! TableHub: booking hours, closed weekdays, and slot generation all use
//! [`DayOfWeek`], so closed-day rules can never drift by one day between
//! components.

use std::fmt;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A weekday number in the Sunday = 0 convention.
///
/// Deserializes from a number or a numeric string (`5` or `"5"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDayOfWeek", into = "u8")]
pub struct DayOfWeek(u8);

/// Rejected weekday value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid day of week {0}, expected 0 (Sunday) through 6 (Saturday)")]
pub struct InvalidDayOfWeek(pub String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDayOfWeek {
    Number(i64),
    Text(String),
}

impl DayOfWeek {
    pub const SUNDAY: Self = Self(0);
    pub const MONDAY: Self = Self(1);
    pub const TUESDAY: Self = Self(2);
    pub const WEDNESDAY: Self = Self(3);
    pub const THURSDAY: Self = Self(4);
    pub const FRIDAY: Self = Self(5);
    pub const SATURDAY: Self = Self(6);

    /// Build from a raw number, rejecting anything outside 0..=6.
    pub fn new(value: u8) -> Option<Self> {
        (value <= 6).then_some(Self(value))
    }

    /// The weekday a calendar date falls on.
    pub fn of(date: NaiveDate) -> Self {
        Self(date.weekday().num_days_from_sunday() as u8)
    }

    /// Raw number, Sunday = 0.
    pub fn value(self) -> u8 {
        self.0
    }

    /// English weekday name.
    pub fn name(self) -> &'static str {
        match self.0 {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            _ => "Saturday",
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = InvalidDayOfWeek;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| InvalidDayOfWeek(value.to_string()))
    }
}

impl TryFrom<i16> for DayOfWeek {
    type Error = InvalidDayOfWeek;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| InvalidDayOfWeek(value.to_string()))
    }
}

impl TryFrom<RawDayOfWeek> for DayOfWeek {
    type Error = InvalidDayOfWeek;

    fn try_from(raw: RawDayOfWeek) -> Result<Self, Self::Error> {
        let number = match &raw {
            RawDayOfWeek::Number(n) => Some(*n),
            RawDayOfWeek::Text(text) => text.trim().parse::<i64>().ok(),
        };
        number
            .and_then(|n| u8::try_from(n).ok())
            .and_then(Self::new)
            .ok_or_else(|| match raw {
                RawDayOfWeek::Number(n) => InvalidDayOfWeek(n.to_string()),
                RawDayOfWeek::Text(text) => InvalidDayOfWeek(text),
            })
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> u8 {
        day.0
    }
}

impl From<DayOfWeek> for i16 {
    fn from(day: DayOfWeek) -> i16 {
        i16::from(day.0)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parse the `date` field of a booking request.
///
/// Accepts a plain `YYYY-MM-DD` calendar date, or a full ISO-8601 timestamp.
/// Timestamps with an offset are normalised to UTC before the calendar date
/// is taken; timestamps without an offset are taken at face value.
pub fn parse_booking_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Some(timestamp.with_timezone(&Utc).date_naive());
    }

    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M"))
        .map(|dt| dt.date())
        .ok()
}
