//! Store provider that selects the configured backend.

use std::sync::Arc;

use tracing::info;

use tablehub_core::config::{AppConfig, StoreBackend};
use tablehub_core::error::{AppError, ErrorKind};
use tablehub_core::result::AppResult;
use tablehub_entity::settings::BookingSettingsRecord;

use crate::connection::DatabasePool;
use crate::memory::{MemoryBookingStore, MemorySettingsStore};
use crate::migration::run_migrations;
use crate::repositories::{BookingRepository, SettingsRepository};
use crate::store::{BookingStore, SettingsStore};

/// The booking and settings stores the service layer runs against.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreProvider {
    /// Booking persistence.
    pub bookings: Arc<dyn BookingStore>,
    /// Booking policy persistence.
    pub settings: Arc<dyn SettingsStore>,
    /// Which backend the stores use.
    pub backend: StoreBackend,
    /// Connection pool, present for the PostgreSQL backend.
    pool: Option<DatabasePool>,
}

impl StoreProvider {
    /// Build the stores named by `database.provider`.
    ///
    /// The PostgreSQL backend connects eagerly and applies pending migrations
    /// when `database.auto_migrate` is set. The memory backend is seeded from
    /// `booking.settings`.
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        match config.database.backend()? {
            StoreBackend::Postgres => {
                info!("Initializing PostgreSQL stores");
                let pool = DatabasePool::connect(&config.database).await?;
                if config.database.auto_migrate {
                    run_migrations(pool.pool()).await?;
                }
                Ok(Self {
                    bookings: Arc::new(BookingRepository::new(pool.pool().clone())),
                    settings: Arc::new(SettingsRepository::new(pool.pool().clone())),
                    backend: StoreBackend::Postgres,
                    pool: Some(pool),
                })
            }
            StoreBackend::Memory => {
                info!("Initializing in-memory stores");
                let record = seed_settings(config.booking.settings.as_ref())?;
                Ok(Self::memory(
                    Arc::new(MemoryBookingStore::new()),
                    Arc::new(MemorySettingsStore::new(record)),
                ))
            }
        }
    }

    /// Wrap existing in-memory stores (for testing).
    pub fn memory(bookings: Arc<MemoryBookingStore>, settings: Arc<MemorySettingsStore>) -> Self {
        Self::with_stores(bookings, settings)
    }

    /// Wrap arbitrary store implementations that need no pool.
    pub fn with_stores(bookings: Arc<dyn BookingStore>, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            bookings,
            settings,
            backend: StoreBackend::Memory,
            pool: None,
        }
    }

    /// The PostgreSQL pool, when running on that backend.
    pub fn pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}

/// Decode the `booking.settings` configuration table into a settings record.
pub fn seed_settings(raw: Option<&serde_json::Value>) -> AppResult<BookingSettingsRecord> {
    match raw {
        None => Ok(BookingSettingsRecord::default()),
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid booking.settings: {e}"),
                e,
            )
        }),
    }
}
