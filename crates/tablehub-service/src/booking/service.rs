//! Booking creation service.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use tablehub_core::error::AppError;
use tablehub_core::result::AppResult;
use tablehub_core::traits::Clock;
use tablehub_core::types::TimeSlot;
use tablehub_database::store::BookingStore;
use tablehub_entity::booking::{Booking, BookingStatus, NewBooking};

use crate::availability::{CalendarPolicy, check_availability};
use crate::settings::SettingsResolver;

use super::locks::DateLocks;

pub const REQUIRED_FIELDS_MESSAGE: &str = "All required fields must be provided";
pub const CLOSED_DATE_MESSAGE: &str = "Bookings are not accepted for this date";

/// A parsed create-booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub date: NaiveDate,
    pub time_slot: TimeSlot,
    pub party_size: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

/// Result of a create-booking call that reached the capacity check.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateBookingOutcome {
    /// The booking was stored.
    Created(Booking),
    /// Too few seats are free across the requested occupancy window.
    InsufficientCapacity {
        /// Seats that are still free.
        available_seats: u32,
    },
}

/// Accepts or rejects new bookings against the current policy.
///
/// The read, capacity check and write for a booking all happen while holding
/// the lock for its date, so concurrent calls in one process cannot jointly
/// exceed capacity.
#[derive(Debug, Clone)]
pub struct BookingService {
    /// Policy accessor.
    settings: SettingsResolver,
    /// Booking store.
    bookings: Arc<dyn BookingStore>,
    /// Source of today's date.
    clock: Arc<dyn Clock>,
    /// Per-date write locks.
    locks: Arc<DateLocks>,
    /// Reject dates the calendar policy marks as closed.
    enforce_calendar_rules: bool,
}

impl BookingService {
    /// Creates a new booking service.
    pub fn new(
        settings: SettingsResolver,
        bookings: Arc<dyn BookingStore>,
        clock: Arc<dyn Clock>,
        enforce_calendar_rules: bool,
    ) -> Self {
        Self {
            settings,
            bookings,
            clock,
            locks: Arc::new(DateLocks::new()),
            enforce_calendar_rules,
        }
    }

    /// Validate, check capacity and persist a confirmed booking.
    ///
    /// Input and policy failures are returned as `Validation` and `Policy`
    /// errors. Lack of capacity is an outcome, not an error.
    pub async fn create(&self, request: BookingRequest) -> AppResult<CreateBookingOutcome> {
        if request.party_size == 0
            || request.name.trim().is_empty()
            || request.email.trim().is_empty()
            || request.phone.trim().is_empty()
        {
            return Err(AppError::validation(REQUIRED_FIELDS_MESSAGE));
        }

        let settings = self.settings.resolve().await?;

        if request.party_size > settings.max_party_size {
            debug!(
                party_size = request.party_size,
                max = settings.max_party_size,
                "Rejected booking over party size limit"
            );
            return Err(AppError::policy(format!(
                "Party size cannot exceed {} people",
                settings.max_party_size
            )));
        }

        let today = self.clock.today();
        if self.enforce_calendar_rules {
            if let Some(closure) = CalendarPolicy::new(&settings, today).closure(request.date) {
                debug!(date = %request.date, reason = %closure, "Rejected booking on closed date");
                return Err(AppError::policy(CLOSED_DATE_MESSAGE));
            }
        }

        self.locks.prune_before(today);
        let _guard = self.locks.lock(request.date).await;

        let existing = self
            .bookings
            .find_by_date(request.date, &BookingStatus::OCCUPYING)
            .await?;
        let report = check_availability(
            request.date,
            request.time_slot,
            Some(request.party_size),
            &existing,
            &settings,
        );

        if report.available_seats < request.party_size {
            info!(
                date = %request.date,
                time_slot = %request.time_slot,
                party_size = request.party_size,
                available = report.available_seats,
                "Booking rejected: not enough capacity"
            );
            return Ok(CreateBookingOutcome::InsufficientCapacity {
                available_seats: report.available_seats,
            });
        }

        let party_size = i32::try_from(request.party_size)
            .map_err(|_| AppError::validation(REQUIRED_FIELDS_MESSAGE))?;
        let booking = self
            .bookings
            .create(&NewBooking {
                date: request.date,
                time_slot: request.time_slot,
                party_size,
                name: request.name,
                email: request.email,
                phone: request.phone,
                notes: request.notes,
                status: BookingStatus::Confirmed,
            })
            .await?;

        info!(
            booking_id = %booking.id,
            date = %booking.date,
            time_slot = %booking.time_slot,
            party_size = booking.party_size,
            "Booking created"
        );
        Ok(CreateBookingOutcome::Created(booking))
    }
}
