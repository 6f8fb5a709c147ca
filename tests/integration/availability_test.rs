//! Integration tests for the availability check endpoint.

mod helpers;

use http::StatusCode;
use serde_json::json;
use tablehub_entity::booking::BookingStatus;
use tablehub_entity::settings::BookingSettingsRecord;

const PATH: &str = "/api/bookings/check-availability";

fn ten_seats() -> BookingSettingsRecord {
    BookingSettingsRecord {
        total_seating_capacity: Some(10),
        table_occupancy_duration: Some(120),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_empty_day_has_full_capacity() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            PATH,
            Some(json!({ "date": "2025-10-03", "timeSlot": "19:00", "partySize": 4 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({
            "availableSeats": 40,
            "totalCapacity": 40,
            "occupiedSeats": 0,
            "canBook": true
        })
    );
}

#[tokio::test]
async fn test_overlapping_bookings_reduce_availability() {
    let app = helpers::TestApp::with_settings(ten_seats());
    let date = helpers::today();
    app.seed_booking(date, "18:00", 6, BookingStatus::Confirmed)
        .await;
    app.seed_booking(date, "17:00", 3, BookingStatus::Cancelled)
        .await;

    let fits = app
        .request(
            "POST",
            PATH,
            Some(json!({ "date": "2025-10-01", "timeSlot": "19:00", "partySize": 4 })),
        )
        .await;
    assert_eq!(fits.status, StatusCode::OK);
    assert_eq!(fits.body["occupiedSeats"], 6);
    assert_eq!(fits.body["availableSeats"], 4);
    assert_eq!(fits.body["canBook"], true);

    let too_many = app
        .request(
            "POST",
            PATH,
            Some(json!({ "date": "2025-10-01", "timeSlot": "19:00", "partySize": 5 })),
        )
        .await;
    assert_eq!(too_many.body["canBook"], false);
}

#[tokio::test]
async fn test_adjacent_windows_do_not_overlap() {
    let app = helpers::TestApp::with_settings(ten_seats());
    app.seed_booking(helpers::today(), "18:00", 10, BookingStatus::Pending)
        .await;

    let response = app
        .request(
            "POST",
            PATH,
            Some(json!({ "date": "2025-10-01", "timeSlot": "20:00" })),
        )
        .await;

    assert_eq!(response.body["availableSeats"], 10);
    assert_eq!(response.body["canBook"], true);
}

#[tokio::test]
async fn test_without_party_size_any_free_seat_is_bookable() {
    let app = helpers::TestApp::with_settings(ten_seats());
    app.seed_booking(helpers::today(), "18:00", 10, BookingStatus::Confirmed)
        .await;

    let response = app
        .request(
            "POST",
            PATH,
            Some(json!({ "date": "2025-10-01", "timeSlot": "18:30", "partySize": 0 })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["availableSeats"], 0);
    assert_eq!(response.body["canBook"], false);
}

#[tokio::test]
async fn test_timestamp_dates_use_their_calendar_date() {
    let app = helpers::TestApp::with_settings(ten_seats());
    app.seed_booking(helpers::today(), "12:00", 7, BookingStatus::Confirmed)
        .await;

    let response = app
        .request(
            "POST",
            PATH,
            Some(json!({ "date": "2025-10-01T00:00:00.000Z", "timeSlot": "12:30" })),
        )
        .await;

    assert_eq!(response.body["occupiedSeats"], 7);
}

#[tokio::test]
async fn test_missing_fields_are_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", PATH, Some(json!({ "date": "2025-10-01" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Date and timeSlot are required");

    let response = app
        .request(
            "POST",
            PATH,
            Some(json!({ "date": "", "timeSlot": "19:00" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Date and timeSlot are required");
}

#[tokio::test]
async fn test_unparseable_fields_are_rejected() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            PATH,
            Some(json!({ "date": "next friday", "timeSlot": "19:00" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid date");

    let response = app
        .request(
            "POST",
            PATH,
            Some(json!({ "date": "2025-10-01", "timeSlot": "25:00" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid timeSlot format");

    let response = app
        .raw_request("POST", PATH, "{\"date\": ".to_string())
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error(), "Invalid request body");
}

#[tokio::test]
async fn test_store_failure_is_generic_500() {
    let router = helpers::broken_router();

    let response = helpers::send(
        &router,
        "POST",
        PATH,
        json!({ "date": "2025-10-01", "timeSlot": "19:00" }).to_string(),
    )
    .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({ "error": "Failed to check availability" }));
}
