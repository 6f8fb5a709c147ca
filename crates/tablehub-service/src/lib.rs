//! # tablehub-service
//!
//! The availability engine. Services read policy and bookings through the
//! store traits of `tablehub-database` and hold them as `Arc` dependencies
//! provided at construction time.
//!
//! - [`settings`] resolves the stored policy record into a fully defaulted
//!   [`BookingSettings`].
//! - [`availability`] holds the pure slot generator, the capacity
//!   calculator and the calendar policy, plus the read-only
//!   [`AvailabilityService`].
//! - [`booking`] serializes booking creation per date and persists accepted
//!   reservations.

pub mod availability;
pub mod booking;
pub mod settings;

pub use availability::{
    AvailabilityReport, AvailabilityService, CalendarPolicy, DateClosure, SlotAvailability,
    SlotListing,
};
pub use booking::{BookingRequest, BookingService, CreateBookingOutcome, DateLocks};
pub use settings::{BookingSettings, SettingsResolver};
