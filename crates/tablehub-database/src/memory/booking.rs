//! In-memory booking store.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use tablehub_core::result::AppResult;
use tablehub_entity::booking::{Booking, BookingStatus, NewBooking};

use crate::store::BookingStore;

/// Booking store holding every record in a vector behind an async lock.
#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl MemoryBookingStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a fully formed record, keeping its id, status and timestamp.
    pub async fn insert(&self, booking: Booking) {
        self.bookings.write().await.push(booking);
    }

    /// Number of stored bookings.
    pub async fn len(&self) -> usize {
        self.bookings.read().await.len()
    }

    /// Whether the store holds no bookings.
    pub async fn is_empty(&self) -> bool {
        self.bookings.read().await.is_empty()
    }
}

#[async_trait]
impl BookingStore for MemoryBookingStore {
    async fn find_by_date(
        &self,
        date: NaiveDate,
        statuses: &[BookingStatus],
    ) -> AppResult<Vec<Booking>> {
        let mut found: Vec<Booking> = self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| b.date == date && statuses.contains(&b.status))
            .cloned()
            .collect();
        found.sort_by_key(|b| (b.time_slot, b.created_at));
        Ok(found)
    }

    async fn create(&self, booking: &NewBooking) -> AppResult<Booking> {
        let record = Booking::from_new(booking.clone(), Utc::now());
        self.bookings.write().await.push(record.clone());
        Ok(record)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
