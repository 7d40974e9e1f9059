//! Integration tests for reservation create, read, update, cancel, and list.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;
use futures::future::join_all;

use tablebook_core::traits::Repository;

use helpers::{ADMIN_CODE, TestApp, today};

#[tokio::test]
async fn test_create_reservation() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/reservation",
            Some(serde_json::json!({
                "customer": "Ana",
                "date": "23/10/2026",
                "people": 4,
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    let data = response.data();
    assert_eq!(data["customer"], "Ana");
    assert_eq!(data["date"], "23/10/2026");
    assert_eq!(data["people"], 4);
    assert!(!data["id"].as_str().unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_create_today_is_accepted() {
    let app = TestApp::new();
    app.book("Bruno", "22/10/2026", 2).await;
}

#[tokio::test]
async fn test_create_rejections() {
    let app = TestApp::new();

    let cases = [
        ("2026-10-23", 2, "INVALID_FORMAT"),
        ("31/02/2026", 2, "INVALID_FORMAT"),
        ("21/10/2026", 2, "PAST_DATE"),
        ("25/10/2026", 2, "CLOSED_DAY"),
        ("26/10/2026", 2, "CLOSED_DAY"),
        ("23/10/2026", 21, "PARTY_SIZE_TOO_LARGE"),
        ("23/10/2026", 0, "VALIDATION_ERROR"),
    ];

    for (date, people, code) in cases {
        let response = app
            .request(
                "POST",
                "/reservation",
                Some(serde_json::json!({
                    "customer": "Ana",
                    "date": date,
                    "people": people,
                })),
            )
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST, "{date} {people}");
        assert_eq!(response.error_code(), code, "{date} {people}");
    }

    let stored = app.store.count().await.expect("count");
    assert_eq!(stored, 0, "no rejected booking is stored");
}

#[tokio::test]
async fn test_create_rejects_blank_customer_and_bad_body() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/reservation",
            Some(serde_json::json!({ "customer": "", "date": "23/10/2026", "people": 2 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app
        .request(
            "POST",
            "/reservation",
            Some(serde_json::json!({ "customer": "Ana", "date": "23/10/2026" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_daily_capacity_is_enforced() {
    let app = TestApp::new();
    let friday = today() + Duration::days(1);
    app.seed("a", friday, 20).await;
    app.seed("b", friday, 20).await;
    app.seed("c", friday, 15).await;

    let response = app
        .request(
            "POST",
            "/reservation",
            Some(serde_json::json!({ "customer": "Late", "date": "23/10/2026", "people": 6 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "DAILY_CAPACITY_EXCEEDED");
    assert!(response.message().contains("Only 5 spots remaining"));

    app.book("Last", "23/10/2026", 5).await;

    let response = app
        .request(
            "POST",
            "/reservation",
            Some(serde_json::json!({ "customer": "Over", "date": "23/10/2026", "people": 1 })),
        )
        .await;
    assert_eq!(response.error_code(), "DAILY_CAPACITY_EXCEEDED");
    assert!(response.message().contains("Only 0 spots remaining"));
}

#[tokio::test]
async fn test_concurrent_bookings_never_overbook() {
    let app = TestApp::new();

    let attempts = (0..10).map(|i| {
        app.request(
            "POST",
            "/reservation",
            Some(serde_json::json!({
                "customer": format!("guest-{i}"),
                "date": "24/10/2026",
                "people": 20,
            })),
        )
    });
    let responses = join_all(attempts).await;

    let accepted = responses
        .iter()
        .filter(|r| r.status == StatusCode::CREATED)
        .count();
    assert_eq!(accepted, 3);
    assert!(
        responses
            .iter()
            .filter(|r| r.status != StatusCode::CREATED)
            .all(|r| r.error_code() == "DAILY_CAPACITY_EXCEEDED")
    );
}

#[tokio::test]
async fn test_get_reservation() {
    let app = TestApp::new();
    let id = app.book("Carla", "24/10/2026", 3).await;

    let response = app.request("GET", &format!("/reservation/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["id"], id.as_str());
    assert_eq!(response.data()["customer"], "Carla");
    assert_eq!(response.data()["people"], 3);

    let response = app.request("GET", "/reservation/missing", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_get_does_not_revalidate_past_reservations() {
    let app = TestApp::new();
    app.seed("old", today() - Duration::days(7), 4).await;

    let response = app.request("GET", "/reservation/old", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["date"], "15/10/2026");
}

#[tokio::test]
async fn test_update_reservation() {
    let app = TestApp::new();
    let id = app.book("Davi", "23/10/2026", 2).await;

    let response = app
        .request(
            "PUT",
            &format!("/reservation/{id}"),
            Some(serde_json::json!({ "people": 6 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["customer"], "Davi");
    assert_eq!(response.data()["date"], "23/10/2026");
    assert_eq!(response.data()["people"], 6);

    let response = app
        .request(
            "PUT",
            &format!("/reservation/{id}"),
            Some(serde_json::json!({ "customer": "Davi S.", "date": "29/10/2026" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["customer"], "Davi S.");
    assert_eq!(response.data()["date"], "29/10/2026");
    assert_eq!(response.data()["people"], 6);

    let response = app.request("GET", &format!("/reservation/{id}"), None).await;
    assert_eq!(response.data()["date"], "29/10/2026");
}

#[tokio::test]
async fn test_update_excludes_own_party_on_same_date() {
    let app = TestApp::new();
    let friday = today() + Duration::days(1);
    app.seed("full-a", friday, 20).await;
    app.seed("full-b", friday, 20).await;
    let id = app.book("Eva", "23/10/2026", 20).await;

    // The day is full, but the party's own seats are not counted against it.
    let response = app
        .request(
            "PUT",
            &format!("/reservation/{id}"),
            Some(serde_json::json!({ "people": 20, "customer": "Eva M." })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "PUT",
            &format!("/reservation/{id}"),
            Some(serde_json::json!({ "people": 21 })),
        )
        .await;
    assert_eq!(response.error_code(), "PARTY_SIZE_TOO_LARGE");
}

#[tokio::test]
async fn test_update_rejections() {
    let app = TestApp::new();
    let id = app.book("Fabio", "23/10/2026", 2).await;
    let path = format!("/reservation/{id}");

    let response = app
        .request("PUT", &path, Some(serde_json::json!({ "date": "25/10/2026" })))
        .await;
    assert_eq!(response.error_code(), "CLOSED_DAY");

    let response = app
        .request("PUT", &path, Some(serde_json::json!({ "date": "01/01/2020" })))
        .await;
    assert_eq!(response.error_code(), "PAST_DATE");

    let response = app
        .request("PUT", &path, Some(serde_json::json!({ "date": "23-10-2026" })))
        .await;
    assert_eq!(response.error_code(), "INVALID_FORMAT");

    let response = app
        .request("PUT", &path, Some(serde_json::json!({ "customer": "" })))
        .await;
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app
        .request(
            "PUT",
            "/reservation/missing",
            Some(serde_json::json!({ "people": 2 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("GET", &path, None).await;
    assert_eq!(response.data()["people"], 2);
    assert_eq!(response.data()["date"], "23/10/2026");
}

#[tokio::test]
async fn test_update_with_empty_date_keeps_stored_date() {
    let app = TestApp::new();
    let id = app.book("Gil", "24/10/2026", 2).await;

    let response = app
        .request(
            "PUT",
            &format!("/reservation/{id}"),
            Some(serde_json::json!({ "date": "", "people": 5 })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["date"], "24/10/2026");
    assert_eq!(response.data()["people"], 5);
}

#[tokio::test]
async fn test_update_moving_into_full_day_is_rejected() {
    let app = TestApp::new();
    let saturday = today() + Duration::days(2);
    app.seed("s1", saturday, 20).await;
    app.seed("s2", saturday, 20).await;
    app.seed("s3", saturday, 18).await;
    let id = app.book("Hugo", "23/10/2026", 4).await;

    let response = app
        .request(
            "PUT",
            &format!("/reservation/{id}"),
            Some(serde_json::json!({ "date": "24/10/2026" })),
        )
        .await;
    assert_eq!(response.error_code(), "DAILY_CAPACITY_EXCEEDED");
    assert!(response.message().contains("Only 2 spots remaining"));
}

#[tokio::test]
async fn test_delete_reservation() {
    let app = TestApp::new();
    let id = app.book("Iris", "23/10/2026", 2).await;
    let path = format!("/reservation/{id}");

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.data()["message"],
        "Reservation cancelled successfully"
    );

    let response = app.request("GET", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app.request("DELETE", &path, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_requires_admin_code() {
    let app = TestApp::new();
    let first = app.book("Joana", "23/10/2026", 2).await;
    let second = app.book("Kai", "24/10/2026", 3).await;

    let response = app.request("GET", "/reservations", None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");

    let response = app
        .request("GET", "/reservations?admin_code=wrong", None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", &format!("/reservations?admin_code={ADMIN_CODE}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let ids: Vec<&str> = response
        .data()
        .as_array()
        .expect("list")
        .iter()
        .filter_map(|r| r["id"].as_str())
        .collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
}

#[tokio::test]
async fn test_ids_are_unique() {
    let app = TestApp::new();
    let mut ids = Vec::new();
    for i in 0..15 {
        ids.push(app.book(&format!("guest-{i}"), "29/10/2026", 1).await);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 15);
    assert!(ids.iter().all(|id| id.len() == app.config.booking.id_length));
}
