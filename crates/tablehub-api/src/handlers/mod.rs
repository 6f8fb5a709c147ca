//! HTTP request handlers.

pub mod availability;
pub mod booking;
pub mod health;
pub mod settings;
pub mod slots;
