//! # tablehub-core
//!
//! Core crate for TableHub. Contains configuration schemas, the calendar
//! primitives shared by every layer (time slots, weekday convention, date
//! parsing), the clock abstraction, and the unified error system.
//!
//! This crate has **no** internal dependencies on other TableHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
