//! Reservation behaviour configuration.

use serde::{Deserialize, Serialize};

/// Booking behaviour configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Reject create-booking requests for dates the calendar marks as closed
    /// (past, beyond the advance horizon, closed weekday, blackout date).
    #[serde(default)]
    pub enforce_calendar_rules: bool,
    /// Initial booking settings for the in-memory settings store.
    ///
    /// Same shape as the persisted settings record; ignored by the
    /// PostgreSQL backend, which reads the `booking_settings` tables.
    #[serde(default)]
    pub settings: Option<serde_json::Value>,
}
