//! Booking policy resolution.

pub mod resolver;

pub use resolver::{
    BookingSettings, DEFAULT_ADVANCE_BOOKING_DAYS, DEFAULT_MAX_PARTY_SIZE,
    DEFAULT_TABLE_OCCUPANCY_DURATION, DEFAULT_TIME_SLOT_DURATION,
    DEFAULT_TOTAL_SEATING_CAPACITY, SettingsResolver,
};
