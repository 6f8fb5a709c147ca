//! Integration tests for booking creation.

mod helpers;

use http::StatusCode;
use serde_json::{Value, json};
use tablehub_core::types::DayOfWeek;
use tablehub_entity::booking::BookingStatus;
use tablehub_entity::settings::{BlackoutDate, BookingSettingsRecord};

const PATH: &str = "/api/bookings/create";

fn booking_body(time_slot: &str, party_size: i64) -> Value {
    json!({
        "date": "2025-10-03",
        "timeSlot": time_slot,
        "partySize": party_size,
        "name": "Ada Lovelace",
        "email": "ada@example.com",
        "phone": "555-0199",
        "notes": "Window seat"
    })
}

fn seats(capacity: i32) -> BookingSettingsRecord {
    BookingSettingsRecord {
        total_seating_capacity: Some(capacity),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_create_booking_success() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", PATH, Some(booking_body("19:00", 4)))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["message"], "Booking created successfully");

    let booking = &response.body["booking"];
    assert_eq!(booking["date"], "2025-10-03");
    assert_eq!(booking["timeSlot"], "19:00");
    assert_eq!(booking["partySize"], 4);
    assert_eq!(booking["name"], "Ada Lovelace");
    assert_eq!(booking["notes"], "Window seat");
    assert_eq!(booking["status"], "confirmed");
    assert!(booking["id"].is_string());
    assert!(booking["createdAt"].is_string());

    assert_eq!(app.bookings.len().await, 1);
}

#[tokio::test]
async fn test_missing_required_field() {
    let app = helpers::TestApp::new();

    for field in ["date", "timeSlot", "partySize", "name", "email", "phone"] {
        let mut body = booking_body("19:00", 2);
        body.as_object_mut().unwrap().remove(field);

        let response = app.request("POST", PATH, Some(body)).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "field {field}");
        assert_eq!(response.error(), "All required fields must be provided");
    }

    let mut body = booking_body("19:00", 2);
    body["name"] = json!("   ");
    let response = app.request("POST", PATH, Some(body)).await;
    assert_eq!(response.error(), "All required fields must be provided");

    let response = app
        .request("POST", PATH, Some(booking_body("19:00", 0)))
        .await;
    assert_eq!(response.error(), "All required fields must be provided");

    assert!(app.bookings.is_empty().await);
}

#[tokio::test]
async fn test_party_size_limit() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", PATH, Some(booking_body("19:00", 9)))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Party size cannot exceed 8 people");
    assert!(app.bookings.is_empty().await);
}

#[tokio::test]
async fn test_insufficient_capacity_conflict() {
    let app = helpers::TestApp::with_settings(seats(10));
    let date = chrono::NaiveDate::from_ymd_opt(2025, 10, 3).unwrap();
    app.seed_booking(date, "18:30", 7, BookingStatus::Confirmed)
        .await;

    let response = app
        .request("POST", PATH, Some(booking_body("19:00", 4)))
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(
        response.body,
        json!({
            "error": "Not enough capacity available for this time slot",
            "availableSeats": 3
        })
    );
    assert_eq!(app.bookings.len().await, 1);
}

#[tokio::test]
async fn test_created_booking_counts_toward_later_checks() {
    let app = helpers::TestApp::with_settings(seats(10));

    let first = app
        .request("POST", PATH, Some(booking_body("19:00", 6)))
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let check = app
        .request(
            "POST",
            "/api/bookings/check-availability",
            Some(json!({ "date": "2025-10-03", "timeSlot": "20:00", "partySize": 4 })),
        )
        .await;
    assert_eq!(check.body["availableSeats"], 4);
    assert_eq!(check.body["canBook"], true);
}

#[tokio::test]
async fn test_invalid_body_and_fields() {
    let app = helpers::TestApp::new();

    let response = app.raw_request("POST", PATH, "not json".to_string()).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid request body");

    let mut body = booking_body("19:00", 2);
    body["date"] = json!("03/10/2025");
    let response = app.request("POST", PATH, Some(body)).await;
    assert_eq!(response.error(), "Invalid date");

    let response = app
        .request("POST", PATH, Some(booking_body("7pm", 2)))
        .await;
    assert_eq!(response.error(), "Invalid timeSlot format");
}

#[tokio::test]
async fn test_calendar_rules_are_opt_in() {
    let record = BookingSettingsRecord {
        closed_weekdays: vec![DayOfWeek::FRIDAY],
        blackout_dates: vec![BlackoutDate {
            date: chrono::NaiveDate::from_ymd_opt(2025, 10, 4).unwrap(),
            reason: Some("Private event".to_string()),
        }],
        ..Default::default()
    };

    let lenient = helpers::TestApp::with_settings(record.clone());
    let response = lenient
        .request("POST", PATH, Some(booking_body("19:00", 2)))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let strict = helpers::TestApp::enforcing(record);
    let response = strict
        .request("POST", PATH, Some(booking_body("19:00", 2)))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Bookings are not accepted for this date");

    let mut body = booking_body("19:00", 2);
    body["date"] = json!("2025-10-04");
    let response = strict.request("POST", PATH, Some(body)).await;
    assert_eq!(response.error(), "Bookings are not accepted for this date");

    let mut body = booking_body("19:00", 2);
    body["date"] = json!("2025-10-02");
    let response = strict.request("POST", PATH, Some(body)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_store_failure_is_generic_500() {
    let router = helpers::broken_router();

    let response = helpers::send(&router, "POST", PATH, booking_body("19:00", 2).to_string()).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({ "error": "Failed to create booking" }));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_requests_never_overbook() {
    let app = helpers::TestApp::with_settings(seats(10));

    let requests: Vec<_> = (0..10)
        .map(|_| {
            let router = app.router.clone();
            tokio::spawn(async move {
                helpers::send(&router, "POST", PATH, booking_body("19:00", 3).to_string()).await
            })
        })
        .collect();

    let mut created = 0;
    let mut conflicts = 0;
    for request in requests {
        match request.await.unwrap().status {
            StatusCode::OK => created += 1,
            StatusCode::CONFLICT => conflicts += 1,
            other => panic!("unexpected status {other}"),
        }
    }

    assert_eq!(created, 3);
    assert_eq!(conflicts, 7);
    assert_eq!(app.bookings.len().await, 3);
}
