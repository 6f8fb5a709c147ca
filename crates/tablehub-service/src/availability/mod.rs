//! Availability computation.
//!
//! [`slots`], [`calculator`] and [`calendar`] are pure functions of policy
//! and data. [`service`] loads both from the stores and composes them.

pub mod calculator;
pub mod calendar;
pub mod service;
pub mod slots;

pub use calculator::{AvailabilityReport, check_availability};
pub use calendar::{CalendarPolicy, DateClosure};
pub use service::{AvailabilityService, SlotAvailability, SlotListing};
pub use slots::{SlotIter, generate_slots};
