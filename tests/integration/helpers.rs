//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use chrono::{NaiveDate, Utc};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use tablehub_core::config::AppConfig;
use tablehub_core::error::AppError;
use tablehub_core::result::AppResult;
use tablehub_core::traits::FixedClock;
use tablehub_database::memory::{MemoryBookingStore, MemorySettingsStore};
use tablehub_database::store::{BookingStore, SettingsStore};
use tablehub_database::StoreProvider;
use tablehub_entity::booking::{Booking, BookingStatus, NewBooking};
use tablehub_entity::settings::BookingSettingsRecord;

/// The date every test app treats as today (a Wednesday).
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Booking store behind the router
    pub bookings: Arc<MemoryBookingStore>,
    /// Settings store behind the router
    pub settings: Arc<MemorySettingsStore>,
}

impl TestApp {
    /// Create a test application with default settings
    pub fn new() -> Self {
        Self::with_settings(BookingSettingsRecord::default())
    }

    /// Create a test application over the given stored settings
    pub fn with_settings(record: BookingSettingsRecord) -> Self {
        Self::build(record, AppConfig::default())
    }

    /// Create a test application that rejects bookings on closed dates
    pub fn enforcing(record: BookingSettingsRecord) -> Self {
        let mut config = AppConfig::default();
        config.booking.enforce_calendar_rules = true;
        Self::build(record, config)
    }

    fn build(record: BookingSettingsRecord, config: AppConfig) -> Self {
        let bookings = Arc::new(MemoryBookingStore::new());
        let settings = Arc::new(MemorySettingsStore::new(record));
        let stores = StoreProvider::memory(Arc::clone(&bookings), Arc::clone(&settings));

        let state = tablehub_api::AppState::new(config, stores, Arc::new(FixedClock::new(today())));
        let router = tablehub_api::build_app(state);

        Self {
            router,
            bookings,
            settings,
        }
    }

    /// Store a booking directly, bypassing the capacity check
    pub async fn seed_booking(
        &self,
        date: NaiveDate,
        time_slot: &str,
        party_size: i32,
        status: BookingStatus,
    ) -> Booking {
        let booking = Booking::from_new(
            NewBooking {
                date,
                time_slot: time_slot.parse().expect("valid time slot"),
                party_size,
                name: "Seeded Guest".to_string(),
                email: "seeded@example.com".to_string(),
                phone: "555-0100".to_string(),
                notes: String::new(),
                status,
            },
            Utc::now(),
        );
        self.bookings.insert(booking.clone()).await;
        booking
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.raw_request(method, path, body_str).await
    }

    /// Make an HTTP request with a verbatim body
    pub async fn raw_request(&self, method: &str, path: &str, body: String) -> TestResponse {
        send(&self.router, method, path, body).await
    }
}

/// Router whose booking store fails every call
pub fn broken_router() -> Router {
    let stores = StoreProvider::with_stores(
        Arc::new(FailingBookingStore),
        Arc::new(MemorySettingsStore::default()),
    );
    let state = tablehub_api::AppState::new(
        AppConfig::default(),
        stores,
        Arc::new(FixedClock::new(today())),
    );
    tablehub_api::build_app(state)
}

/// Router whose settings store fails every call
pub fn broken_settings_router() -> Router {
    let stores = StoreProvider::with_stores(
        Arc::new(MemoryBookingStore::new()),
        Arc::new(FailingSettingsStore),
    );
    let state = tablehub_api::AppState::new(
        AppConfig::default(),
        stores,
        Arc::new(FixedClock::new(today())),
    );
    tablehub_api::build_app(state)
}

/// Send a request through `router`
pub async fn send(router: &Router, method: &str, path: &str, body: String) -> TestResponse {
    let req = Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .expect("Failed to build request");

    let response = router
        .clone()
        .oneshot(req)
        .await
        .expect("Failed to send request");

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("Failed to read body");

    let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `error` message of a failure body
    pub fn error(&self) -> &str {
        self.body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }
}

#[derive(Debug)]
struct FailingBookingStore;

#[async_trait]
impl BookingStore for FailingBookingStore {
    async fn find_by_date(
        &self,
        _date: NaiveDate,
        _statuses: &[BookingStatus],
    ) -> AppResult<Vec<Booking>> {
        Err(AppError::database("connection refused"))
    }

    async fn create(&self, _booking: &NewBooking) -> AppResult<Booking> {
        Err(AppError::database("connection refused"))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Err(AppError::database("connection refused"))
    }
}

#[derive(Debug)]
struct FailingSettingsStore;

#[async_trait]
impl SettingsStore for FailingSettingsStore {
    async fn get_booking_settings(&self) -> AppResult<BookingSettingsRecord> {
        Err(AppError::database("connection refused"))
    }
}
