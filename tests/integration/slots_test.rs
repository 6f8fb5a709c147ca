//! Integration tests for slot listings, public settings and health.

mod helpers;

use http::StatusCode;
use serde_json::json;
use tablehub_core::types::DayOfWeek;
use tablehub_entity::booking::BookingStatus;
use tablehub_entity::settings::{BlackoutDate, BookingHours, BookingSettingsRecord};

const PATH: &str = "/api/bookings/slots";

fn hours(day: DayOfWeek, open: &str, close: &str) -> BookingHours {
    BookingHours {
        day_of_week: day,
        opening_time: open.parse().ok(),
        closing_time: close.parse().ok(),
        is_closed: false,
    }
}

fn evening_service() -> BookingSettingsRecord {
    BookingSettingsRecord {
        total_seating_capacity: Some(10),
        table_occupancy_duration: Some(60),
        time_slot_duration: Some(30),
        advance_booking_days: Some(14),
        closed_weekdays: vec![DayOfWeek::MONDAY],
        blackout_dates: vec![BlackoutDate {
            date: chrono::NaiveDate::from_ymd_opt(2025, 10, 10).unwrap(),
            reason: Some("Private event".to_string()),
        }],
        booking_hours: vec![
            hours(DayOfWeek::FRIDAY, "18:00", "20:00"),
            BookingHours {
                day_of_week: DayOfWeek::SATURDAY,
                opening_time: None,
                closing_time: None,
                is_closed: true,
            },
        ],
        ..Default::default()
    }
}

#[tokio::test]
async fn test_slots_follow_booking_hours() {
    let app = helpers::TestApp::with_settings(evening_service());
    let friday = chrono::NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
    app.seed_booking(friday, "18:30", 9, BookingStatus::Confirmed)
        .await;

    let response = app
        .request(
            "POST",
            PATH,
            Some(json!({ "date": "2025-10-03", "partySize": 2 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["closed"], false);
    assert!(response.body.get("reason").is_none());
    assert_eq!(
        response.body["slots"],
        json!([
            { "timeSlot": "18:00", "availableSeats": 1, "canBook": false },
            { "timeSlot": "18:30", "availableSeats": 1, "canBook": false },
            { "timeSlot": "19:00", "availableSeats": 1, "canBook": false },
            { "timeSlot": "19:30", "availableSeats": 10, "canBook": true }
        ])
    );
}

#[tokio::test]
async fn test_day_without_hours_has_no_slots() {
    let app = helpers::TestApp::with_settings(evening_service());

    let response = app
        .request("POST", PATH, Some(json!({ "date": "2025-10-02" })))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["closed"], false);
    assert_eq!(response.body["slots"], json!([]));
}

#[tokio::test]
async fn test_closed_dates_report_reason() {
    let app = helpers::TestApp::with_settings(evening_service());

    let cases = [
        ("2025-10-06", "closed_weekday"),
        ("2025-10-10", "blackout"),
        ("2025-10-04", "closed_hours"),
        ("2025-09-30", "past"),
        ("2025-10-17", "beyond_horizon"),
    ];

    for (date, reason) in cases {
        let response = app.request("POST", PATH, Some(json!({ "date": date }))).await;
        assert_eq!(response.status, StatusCode::OK, "date {date}");
        assert_eq!(response.body["closed"], true, "date {date}");
        assert_eq!(response.body["reason"], reason, "date {date}");
        assert_eq!(response.body["slots"], json!([]), "date {date}");
    }
}

#[tokio::test]
async fn test_slots_request_errors() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", PATH, Some(json!({}))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Date is required");

    let response = app
        .request("POST", PATH, Some(json!({ "date": "soon" })))
        .await;
    assert_eq!(response.error(), "Invalid date");

    let router = helpers::broken_router();
    let response = helpers::send(
        &router,
        "POST",
        PATH,
        json!({ "date": "2025-10-02" }).to_string(),
    )
    .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error(), "Failed to list time slots");
}

#[tokio::test]
async fn test_public_settings() {
    let app = helpers::TestApp::with_settings(evening_service());

    let response = app.request("GET", "/api/bookings/settings", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["maxPartySize"], 8);
    assert_eq!(response.body["timeSlotDuration"], 30);
    assert_eq!(response.body["advanceBookingDays"], 14);
    assert_eq!(response.body["closedWeekdays"], json!([1]));
    assert_eq!(
        response.body["blackoutDates"],
        json!([{ "date": "2025-10-10", "reason": "Private event" }])
    );
    assert_eq!(response.body["bookingHours"][0]["dayOfWeek"], 5);
    assert_eq!(response.body["bookingHours"][0]["openingTime"], "18:00");
    assert_eq!(response.body["bookableFrom"], "2025-10-01");
    assert_eq!(response.body["bookableUntil"], "2025-10-15");
}

#[tokio::test]
async fn test_settings_store_failure() {
    let router = helpers::broken_settings_router();

    let response = helpers::send(&router, "GET", "/api/bookings/settings", String::new()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error(), "Failed to load booking settings");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();
    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["storage"], "memory");

    let router = helpers::broken_router();
    let response = helpers::send(&router, "GET", "/api/health", String::new()).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "degraded");
}
