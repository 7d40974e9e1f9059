//! Integration tests for availability and health endpoints.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;

use helpers::{TestApp, today};

#[tokio::test]
async fn test_availability_of_empty_day() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/availability?date=23/10/2026", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["date"], "23/10/2026");
    assert_eq!(response.data()["available_slots"], 60);
}

#[tokio::test]
async fn test_availability_tracks_bookings_and_cancellations() {
    let app = TestApp::new();
    app.seed("a", today(), 20).await;
    app.seed("b", today(), 20).await;
    let id = app.book("Lia", "22/10/2026", 15).await;

    let response = app
        .request("GET", "/availability?date=22/10/2026", None)
        .await;
    assert_eq!(response.data()["available_slots"], 5);

    app.request("DELETE", &format!("/reservation/{id}"), None)
        .await;

    let response = app
        .request("GET", "/availability?date=22/10/2026", None)
        .await;
    assert_eq!(response.data()["available_slots"], 20);
}

#[tokio::test]
async fn test_availability_ignores_other_dates() {
    let app = TestApp::new();
    app.seed("fri", today() + Duration::days(1), 18).await;

    let response = app
        .request("GET", "/availability?date=24/10/2026", None)
        .await;
    assert_eq!(response.data()["available_slots"], 60);
}

#[tokio::test]
async fn test_availability_validates_date() {
    let app = TestApp::new();

    let cases = [
        ("/availability?date=24-10-2026", "INVALID_FORMAT"),
        ("/availability?date=21/10/2026", "PAST_DATE"),
        ("/availability?date=27/10/2026", "CLOSED_DAY"),
        ("/availability", "VALIDATION_ERROR"),
    ];

    for (path, code) in cases {
        let response = app.request("GET", path, None).await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(response.error_code(), code, "{path}");
    }
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.data()["status"], "ok");
    assert_eq!(response.data()["database"], "disabled");
    assert!(response.data().get("database_latency_ms").is_none());
    assert!(response.data()["version"].is_string());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::new();
    let response = app.request("GET", "/nope", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
