//! Store traits consumed by the availability engine.

use async_trait::async_trait;
use chrono::NaiveDate;

use tablehub_core::result::AppResult;
use tablehub_entity::booking::{Booking, BookingStatus, NewBooking};
use tablehub_entity::settings::BookingSettingsRecord;

/// Persistence for booking records.
///
/// Implementations make no atomicity promise across calls; callers that need
/// read-check-write semantics serialize on their side.
#[async_trait]
pub trait BookingStore: Send + Sync + std::fmt::Debug + 'static {
    /// Bookings on `date` whose status is one of `statuses`, ordered by start time.
    async fn find_by_date(
        &self,
        date: NaiveDate,
        statuses: &[BookingStatus],
    ) -> AppResult<Vec<Booking>>;

    /// Persist a new booking and return the stored record.
    async fn create(&self, booking: &NewBooking) -> AppResult<Booking>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Read access to the singleton booking settings record.
#[async_trait]
pub trait SettingsStore: Send + Sync + std::fmt::Debug + 'static {
    /// Load the stored record. A store with nothing saved yet returns an
    /// empty record rather than an error.
    async fn get_booking_settings(&self) -> AppResult<BookingSettingsRecord>;
}
