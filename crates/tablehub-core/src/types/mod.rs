//! Core type definitions used across the TableHub workspace.

pub mod calendar;
pub mod time_slot;

pub use calendar::{DayOfWeek, parse_booking_date};
pub use time_slot::{ParseTimeSlotError, TimeSlot};
