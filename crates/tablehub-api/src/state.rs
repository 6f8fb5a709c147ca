//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use tablehub_core::config::AppConfig;
use tablehub_core::traits::Clock;
use tablehub_database::StoreProvider;
use tablehub_service::{AvailabilityService, BookingService, SettingsResolver};

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
    /// Booking and settings stores.
    pub stores: StoreProvider,
    /// Availability checks, slot listings and policy reads.
    pub availability: Arc<AvailabilityService>,
    /// Booking creation.
    pub bookings: Arc<BookingService>,
}

impl AppState {
    /// Wire the services over `stores`.
    pub fn new(config: AppConfig, stores: StoreProvider, clock: Arc<dyn Clock>) -> Self {
        let resolver = SettingsResolver::new(Arc::clone(&stores.settings));

        let availability = Arc::new(AvailabilityService::new(
            resolver.clone(),
            Arc::clone(&stores.bookings),
            Arc::clone(&clock),
        ));
        let bookings = Arc::new(BookingService::new(
            resolver,
            Arc::clone(&stores.bookings),
            clock,
            config.booking.enforce_calendar_rules,
        ));

        Self {
            config: Arc::new(config),
            stores,
            availability,
            bookings,
        }
    }
}
