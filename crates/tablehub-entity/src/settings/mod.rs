//! Reservation policy entities.

pub mod model;

pub use model::{BlackoutDate, BookingHours, BookingSettingsRecord};
