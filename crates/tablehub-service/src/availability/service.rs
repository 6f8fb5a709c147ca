//! Read-only availability queries.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use tablehub_core::result::AppResult;
use tablehub_core::traits::Clock;
use tablehub_core::types::TimeSlot;
use tablehub_database::store::BookingStore;
use tablehub_entity::booking::BookingStatus;

use crate::settings::{BookingSettings, SettingsResolver};

use super::calculator::{AvailabilityReport, check_availability};
use super::calendar::{CalendarPolicy, DateClosure};
use super::slots::generate_slots;

/// One generated slot with its seat availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotAvailability {
    pub time_slot: TimeSlot,
    pub report: AvailabilityReport,
}

/// Every slot offered on a date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotListing {
    pub date: NaiveDate,
    /// Set when the date does not accept bookings; `slots` is then empty.
    pub closure: Option<DateClosure>,
    pub slots: Vec<SlotAvailability>,
}

/// Availability checks and slot listings.
///
/// Takes no locks: reads may observe a booking that is being written
/// concurrently, or miss it.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    /// Policy accessor.
    settings: SettingsResolver,
    /// Booking store.
    bookings: Arc<dyn BookingStore>,
    /// Source of today's date.
    clock: Arc<dyn Clock>,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(
        settings: SettingsResolver,
        bookings: Arc<dyn BookingStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            settings,
            bookings,
            clock,
        }
    }

    /// Seat availability for a single candidate slot.
    pub async fn check(
        &self,
        date: NaiveDate,
        time_slot: TimeSlot,
        party_size: Option<u32>,
    ) -> AppResult<AvailabilityReport> {
        let settings = self.settings.resolve().await?;
        let existing = self
            .bookings
            .find_by_date(date, &BookingStatus::OCCUPYING)
            .await?;

        let report = check_availability(date, time_slot, party_size, &existing, &settings);
        debug!(
            %date,
            %time_slot,
            party_size,
            available = report.available_seats,
            occupied = report.occupied_seats,
            "Checked availability"
        );
        Ok(report)
    }

    /// Generated slots for `date`, each with its availability.
    ///
    /// Bookings for the date are read once and shared across all slots.
    pub async fn list_slots(
        &self,
        date: NaiveDate,
        party_size: Option<u32>,
    ) -> AppResult<SlotListing> {
        let settings = self.settings.resolve().await?;

        let closure = CalendarPolicy::new(&settings, self.clock.today()).closure(date);
        if closure.is_some() {
            return Ok(SlotListing {
                date,
                closure,
                slots: Vec::new(),
            });
        }

        let existing = self
            .bookings
            .find_by_date(date, &BookingStatus::OCCUPYING)
            .await?;

        let slots = generate_slots(date, &settings.booking_hours, settings.time_slot_duration)
            .map(|time_slot| SlotAvailability {
                time_slot,
                report: check_availability(date, time_slot, party_size, &existing, &settings),
            })
            .collect();

        Ok(SlotListing {
            date,
            closure: None,
            slots,
        })
    }

    /// The currently resolved policy.
    pub async fn settings(&self) -> AppResult<BookingSettings> {
        self.settings.resolve().await
    }

    /// Today according to the service clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}
