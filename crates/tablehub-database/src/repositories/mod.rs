//! PostgreSQL repositories for TableHub entities.

pub mod booking;
pub mod settings;

pub use booking::BookingRepository;
pub use settings::SettingsRepository;
