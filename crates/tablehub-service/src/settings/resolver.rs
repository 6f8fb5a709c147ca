//! Settings resolver.
//!
//! The stored record leaves every numeric field optional. Resolution fills
//! the gaps with fixed defaults. Capacity, durations and party size must be
//! positive, so a stored zero or negative number is treated the same as an
//! unset one. The advance horizon only has to be non-negative: zero means
//! today only.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use tablehub_core::result::AppResult;
use tablehub_core::types::DayOfWeek;
use tablehub_database::store::SettingsStore;
use tablehub_entity::settings::{BookingHours, BookingSettingsRecord};

pub const DEFAULT_TOTAL_SEATING_CAPACITY: u32 = 40;
pub const DEFAULT_TABLE_OCCUPANCY_DURATION: u32 = 120;
pub const DEFAULT_MAX_PARTY_SIZE: u32 = 8;
pub const DEFAULT_TIME_SLOT_DURATION: u32 = 30;
pub const DEFAULT_ADVANCE_BOOKING_DAYS: u32 = 30;

/// Fully resolved reservation policy for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingSettings {
    /// Seats available at any instant.
    pub total_seating_capacity: u32,
    /// Minutes a party occupies its seats from the slot start.
    pub table_occupancy_duration: u32,
    /// Largest party accepted in one booking.
    pub max_party_size: u32,
    /// Minutes between offered slot starts.
    pub time_slot_duration: u32,
    /// How many days past today remain bookable.
    pub advance_booking_days: u32,
    /// Weekdays closed every week.
    pub closed_weekdays: BTreeSet<DayOfWeek>,
    /// Specific closed dates with their optional reason.
    pub blackout_dates: BTreeMap<NaiveDate, Option<String>>,
    /// Booking window per weekday, in stored order.
    pub booking_hours: Vec<BookingHours>,
}

impl BookingSettings {
    /// Apply defaults to a stored record.
    pub fn from_record(record: BookingSettingsRecord) -> Self {
        Self {
            total_seating_capacity: positive_or(
                record.total_seating_capacity,
                DEFAULT_TOTAL_SEATING_CAPACITY,
            ),
            table_occupancy_duration: positive_or(
                record.table_occupancy_duration,
                DEFAULT_TABLE_OCCUPANCY_DURATION,
            ),
            max_party_size: positive_or(record.max_party_size, DEFAULT_MAX_PARTY_SIZE),
            time_slot_duration: positive_or(record.time_slot_duration, DEFAULT_TIME_SLOT_DURATION),
            advance_booking_days: non_negative_or(
                record.advance_booking_days,
                DEFAULT_ADVANCE_BOOKING_DAYS,
            ),
            closed_weekdays: record.closed_weekdays.into_iter().collect(),
            blackout_dates: record
                .blackout_dates
                .into_iter()
                .map(|b| (b.date, b.reason))
                .collect(),
            booking_hours: record.booking_hours,
        }
    }

    /// The first booking hours entry for `day`, if any.
    pub fn hours_for(&self, day: DayOfWeek) -> Option<&BookingHours> {
        self.booking_hours.iter().find(|h| h.day_of_week == day)
    }
}

impl Default for BookingSettings {
    fn default() -> Self {
        Self::from_record(BookingSettingsRecord::default())
    }
}

fn positive_or(value: Option<i32>, default: u32) -> u32 {
    value
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| *v > 0)
        .unwrap_or(default)
}

fn non_negative_or(value: Option<i32>, default: u32) -> u32 {
    value
        .and_then(|v| u32::try_from(v).ok())
        .unwrap_or(default)
}

/// Read-through accessor for the current booking policy.
///
/// Every call goes to the store; nothing is cached between requests.
#[derive(Debug, Clone)]
pub struct SettingsResolver {
    store: Arc<dyn SettingsStore>,
}

impl SettingsResolver {
    /// Creates a new resolver over `store`.
    pub fn new(store: Arc<dyn SettingsStore>) -> Self {
        Self { store }
    }

    /// Load the stored record and apply defaults.
    pub async fn resolve(&self) -> AppResult<BookingSettings> {
        let record = self.store.get_booking_settings().await?;
        let settings = BookingSettings::from_record(record);
        debug!(
            capacity = settings.total_seating_capacity,
            occupancy_minutes = settings.table_occupancy_duration,
            max_party_size = settings.max_party_size,
            "Resolved booking settings"
        );
        Ok(settings)
    }
}
