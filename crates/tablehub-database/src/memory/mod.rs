//! In-process store implementations.
//!
//! These back single-node deployments without PostgreSQL and every test
//! that exercises the service or HTTP layers.

pub mod booking;
pub mod settings;

pub use booking::MemoryBookingStore;
pub use settings::MemorySettingsStore;
