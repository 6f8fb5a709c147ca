//! # tablehub-entity
//!
//! Domain entity models for TableHub. Every struct in this crate represents
//! a database row or a stored value object. Booking rows derive
//! `sqlx::FromRow`; settings are assembled from several tables by the
//! repository layer.

pub mod booking;
pub mod settings;

pub use booking::{Booking, BookingStatus, NewBooking};
pub use settings::{BlackoutDate, BookingHours, BookingSettingsRecord};
