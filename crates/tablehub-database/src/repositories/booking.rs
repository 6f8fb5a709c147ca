//! Booking repository implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use tablehub_core::error::{AppError, ErrorKind};
use tablehub_core::result::AppResult;
use tablehub_entity::booking::{Booking, BookingStatus, NewBooking};

use crate::store::BookingStore;

/// Repository for booking reads and inserts.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    /// Create a new booking repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn find_by_date(
        &self,
        date: NaiveDate,
        statuses: &[BookingStatus],
    ) -> AppResult<Vec<Booking>> {
        let statuses: Vec<String> = statuses.iter().map(|s| s.as_str().to_string()).collect();

        sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE date = $1 AND status::text = ANY($2) \
             ORDER BY time_slot, created_at",
        )
        .bind(date)
        .bind(&statuses)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find bookings by date", e)
        })
    }

    async fn create(&self, booking: &NewBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "INSERT INTO bookings (date, time_slot, party_size, name, email, phone, notes, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
        )
        .bind(booking.date)
        .bind(booking.time_slot)
        .bind(booking.party_size)
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(&booking.notes)
        .bind(booking.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create booking", e))
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
