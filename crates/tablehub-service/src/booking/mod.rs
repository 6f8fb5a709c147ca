//! Booking creation.

pub mod locks;
pub mod service;

pub use locks::DateLocks;
pub use service::{
    BookingRequest, BookingService, CLOSED_DATE_MESSAGE, CreateBookingOutcome,
    REQUIRED_FIELDS_MESSAGE,
};
