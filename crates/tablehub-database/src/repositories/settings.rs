//! Booking settings repository implementation.
//!
//! The policy is spread over three tables: the singleton `booking_settings`
//! row, `blackout_dates`, and one `booking_hours` row per weekday. Rows that
//! fail to decode into domain values are logged and skipped so that one bad
//! admin edit cannot take the booking API down.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::warn;

use tablehub_core::error::{AppError, ErrorKind};
use tablehub_core::result::AppResult;
use tablehub_core::types::{DayOfWeek, TimeSlot};
use tablehub_entity::settings::{BlackoutDate, BookingHours, BookingSettingsRecord};

use crate::store::SettingsStore;

#[derive(Debug, FromRow)]
struct SettingsRow {
    total_seating_capacity: Option<i32>,
    table_occupancy_duration: Option<i32>,
    max_party_size: Option<i32>,
    time_slot_duration: Option<i32>,
    advance_booking_days: Option<i32>,
    closed_weekdays: Vec<i16>,
}

#[derive(Debug, FromRow)]
struct HoursRow {
    day_of_week: i16,
    opening_time: Option<String>,
    closing_time: Option<String>,
    is_closed: bool,
}

/// Repository for the booking policy tables.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    /// Create a new settings repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replace the stored policy with `record` in one transaction.
    pub async fn replace(&self, record: &BookingSettingsRecord) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(db_err("Failed to begin transaction"))?;

        let weekdays: Vec<i16> = record.closed_weekdays.iter().map(|d| i16::from(*d)).collect();
        sqlx::query(
            "INSERT INTO booking_settings (id, total_seating_capacity, table_occupancy_duration, \
             max_party_size, time_slot_duration, advance_booking_days, closed_weekdays, updated_at) \
             VALUES (1, $1, $2, $3, $4, $5, $6, NOW()) \
             ON CONFLICT (id) DO UPDATE SET \
             total_seating_capacity = EXCLUDED.total_seating_capacity, \
             table_occupancy_duration = EXCLUDED.table_occupancy_duration, \
             max_party_size = EXCLUDED.max_party_size, \
             time_slot_duration = EXCLUDED.time_slot_duration, \
             advance_booking_days = EXCLUDED.advance_booking_days, \
             closed_weekdays = EXCLUDED.closed_weekdays, \
             updated_at = NOW()",
        )
        .bind(record.total_seating_capacity)
        .bind(record.table_occupancy_duration)
        .bind(record.max_party_size)
        .bind(record.time_slot_duration)
        .bind(record.advance_booking_days)
        .bind(&weekdays)
        .execute(&mut *tx)
        .await
        .map_err(db_err("Failed to save booking settings"))?;

        sqlx::query("DELETE FROM blackout_dates")
            .execute(&mut *tx)
            .await
            .map_err(db_err("Failed to clear blackout dates"))?;
        for blackout in &record.blackout_dates {
            sqlx::query("INSERT INTO blackout_dates (date, reason) VALUES ($1, $2)")
                .bind(blackout.date)
                .bind(&blackout.reason)
                .execute(&mut *tx)
                .await
                .map_err(db_err("Failed to save blackout date"))?;
        }

        sqlx::query("DELETE FROM booking_hours")
            .execute(&mut *tx)
            .await
            .map_err(db_err("Failed to clear booking hours"))?;
        for hours in &record.booking_hours {
            sqlx::query(
                "INSERT INTO booking_hours (day_of_week, opening_time, closing_time, is_closed) \
                 VALUES ($1, $2, $3, $4)",
            )
            .bind(i16::from(hours.day_of_week))
            .bind(hours.opening_time)
            .bind(hours.closing_time)
            .bind(hours.is_closed)
            .execute(&mut *tx)
            .await
            .map_err(db_err("Failed to save booking hours"))?;
        }

        tx.commit()
            .await
            .map_err(db_err("Failed to commit booking settings"))
    }

    async fn load_hours(&self) -> AppResult<Vec<BookingHours>> {
        let rows = sqlx::query_as::<_, HoursRow>(
            "SELECT day_of_week, opening_time, closing_time, is_closed \
             FROM booking_hours ORDER BY day_of_week",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load booking hours", e)
        })?;

        Ok(rows.into_iter().filter_map(decode_hours).collect())
    }
}

#[async_trait]
impl SettingsStore for SettingsRepository {
    async fn get_booking_settings(&self) -> AppResult<BookingSettingsRecord> {
        let row = sqlx::query_as::<_, SettingsRow>(
            "SELECT total_seating_capacity, table_occupancy_duration, max_party_size, \
             time_slot_duration, advance_booking_days, closed_weekdays \
             FROM booking_settings WHERE id = 1",
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load booking settings", e)
        })?;

        let blackout_dates = sqlx::query_as::<_, BlackoutDate>(
            "SELECT date, reason FROM blackout_dates ORDER BY date",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load blackout dates", e)
        })?;

        let booking_hours = self.load_hours().await?;

        let mut record = BookingSettingsRecord {
            blackout_dates,
            booking_hours,
            ..Default::default()
        };

        if let Some(row) = row {
            record.total_seating_capacity = row.total_seating_capacity;
            record.table_occupancy_duration = row.table_occupancy_duration;
            record.max_party_size = row.max_party_size;
            record.time_slot_duration = row.time_slot_duration;
            record.advance_booking_days = row.advance_booking_days;
            record.closed_weekdays = row
                .closed_weekdays
                .into_iter()
                .filter_map(|raw| match DayOfWeek::try_from(raw) {
                    Ok(day) => Some(day),
                    Err(e) => {
                        warn!(error = %e, "Skipping invalid closed weekday");
                        None
                    }
                })
                .collect();
        }

        Ok(record)
    }
}

fn db_err(message: &'static str) -> impl Fn(sqlx::Error) -> AppError {
    move |e| AppError::with_source(ErrorKind::Database, message, e)
}

fn decode_hours(row: HoursRow) -> Option<BookingHours> {
    let day_of_week = match DayOfWeek::try_from(row.day_of_week) {
        Ok(day) => day,
        Err(e) => {
            warn!(error = %e, "Skipping booking hours row with invalid weekday");
            return None;
        }
    };

    let parse = |raw: Option<String>| -> Result<Option<TimeSlot>, String> {
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some).map_err(|_| value.to_string()),
        }
    };

    match (parse(row.opening_time), parse(row.closing_time)) {
        (Ok(opening_time), Ok(closing_time)) => Some(BookingHours {
            day_of_week,
            opening_time,
            closing_time,
            is_closed: row.is_closed,
        }),
        (Err(bad), _) | (_, Err(bad)) => {
            warn!(
                day = %day_of_week,
                value = %bad,
                "Skipping booking hours row with unparseable time"
            );
            None
        }
    }
}
