//! In-memory settings store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use tablehub_core::result::AppResult;
use tablehub_entity::settings::BookingSettingsRecord;

use crate::store::SettingsStore;

/// Settings store holding the record in process memory.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    record: RwLock<BookingSettingsRecord>,
}

impl MemorySettingsStore {
    /// Create a store seeded with `record`.
    pub fn new(record: BookingSettingsRecord) -> Self {
        Self {
            record: RwLock::new(record),
        }
    }

    /// Swap in a new record. Later reads see it immediately.
    pub async fn replace(&self, record: BookingSettingsRecord) {
        *self.record.write().await = record;
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_booking_settings(&self) -> AppResult<BookingSettingsRecord> {
        Ok(self.record.read().await.clone())
    }
}
