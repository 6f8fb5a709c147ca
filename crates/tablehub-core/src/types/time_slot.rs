//! Wall-clock time of day used for booking slots and opening hours.
//!
//! A [`TimeSlot`] is an `"HH:MM"` value in venue-local time with no timezone
//! component. It is stored as minutes since midnight so slot arithmetic is
//! plain integer math. When the `sqlx` feature is enabled it maps to a
//! PostgreSQL `TEXT` column holding the `"HH:MM"` form.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    minutes: u16,
}

/// Error returned when a string is not a valid `"HH:MM"` time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid time slot '{0}', expected HH:MM")]
pub struct ParseTimeSlotError(pub String);

impl TimeSlot {
    /// Build from hour and minute; `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self {
                minutes: (hour * 60 + minute) as u16,
            })
        } else {
            None
        }
    }

    /// Build from minutes since midnight; `None` at or past 24:00.
    pub fn from_minutes(minutes: u32) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self {
            minutes: minutes as u16,
        })
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.minutes) / 60
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minutes) % 60
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.minutes)
    }

    /// Combine with a calendar date into a wall-clock instant.
    pub fn on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(self.minutes))
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = ParseTimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeSlotError(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;

        let parse_part = |part: &str| -> Option<u32> {
            if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            part.parse().ok()
        };

        let hour = parse_part(hour).ok_or_else(invalid)?;
        let minute = parse_part(minute).ok_or_else(invalid)?;
        Self::from_hm(hour, minute).ok_or_else(invalid)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "sqlx")]
impl sqlx::Type<sqlx::Postgres> for TimeSlot {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "sqlx")]
impl<'q> sqlx::Encode<'q, sqlx::Postgres> for TimeSlot {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.to_string(), buf)
    }
}

#[cfg(feature = "sqlx")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for TimeSlot {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <String as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        raw.parse::<Self>().map_err(|e| Box::new(e) as sqlx::error::BoxDynError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(s: &str) -> TimeSlot {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(slot("08:30").to_string(), "08:30");
        assert_eq!(slot("8:05").to_string(), "08:05");
        assert_eq!(slot("23:59").minutes_since_midnight(), 23 * 60 + 59);
        assert_eq!(slot("00:00").minutes_since_midnight(), 0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "12", "24:00", "12:60", "ab:cd", "12:5a", "-1:30", "123:00", "12:30:00"] {
            assert!(bad.parse::<TimeSlot>().is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_ordering_follows_time_of_day() {
        assert!(slot("09:45") < slot("10:00"));
        assert!(slot("13:59") < slot("14:00"));
    }

    #[test]
    fn test_on_date() {
        let date = NaiveDate::from_ymd_opt(2025, 5, 17).unwrap();
        let at = slot("19:15").on(date);
        assert_eq!(at.to_string(), "2025-05-17 19:15:00");
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&slot("12:00")).unwrap();
        assert_eq!(json, "\"12:00\"");
        let back: TimeSlot = serde_json::from_str("\"7:30\"").unwrap();
        assert_eq!(back, slot("07:30"));
        assert!(serde_json::from_str::<TimeSlot>("\"7.30\"").is_err());
    }

    #[test]
    fn test_from_minutes_bounds() {
        assert_eq!(TimeSlot::from_minutes(90), Some(slot("01:30")));
        assert_eq!(TimeSlot::from_minutes(24 * 60), None);
    }
}
