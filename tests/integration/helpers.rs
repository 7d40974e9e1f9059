//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use tablebook_api::AppState;
use tablebook_core::config::{AppConfig, StorageBackend};
use tablebook_core::traits::{FixedClock, Repository};
use tablebook_core::types::{BookingDate, ReservationId};
use tablebook_database::MemoryReservationStore;
use tablebook_entity::Reservation;
use tablebook_service::ReservationService;

/// Admin code configured for every test app.
pub const ADMIN_CODE: &str = "test-admin";

/// Thursday 22/10/2026, the "today" of every test app.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 22).expect("valid date")
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store for direct seeding and inspection
    pub store: Arc<MemoryReservationStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = StorageBackend::Memory;
        config.booking.admin_code = ADMIN_CODE.to_string();

        let store = Arc::new(MemoryReservationStore::new());
        let service = ReservationService::new(
            Arc::clone(&store) as Arc<dyn tablebook_database::ReservationStore>,
            config.booking.clone(),
            Arc::new(FixedClock(today())),
        );

        let router = tablebook_api::build_app(AppState::new(config.clone(), service));

        Self {
            router,
            store,
            config,
        }
    }

    /// Insert a reservation directly, bypassing admission rules
    pub async fn seed(&self, id: &str, date: NaiveDate, party_size: u32) {
        self.store
            .create(&Reservation {
                id: ReservationId::from(id),
                customer: format!("seed-{id}"),
                date: BookingDate::new(date),
                party_size,
            })
            .await
            .expect("Failed to seed reservation");
    }

    /// Book through the API and return the new reservation id
    pub async fn book(&self, customer: &str, date: &str, people: u32) -> String {
        let response = self
            .request(
                "POST",
                "/reservation",
                Some(serde_json::json!({
                    "customer": customer,
                    "date": date,
                    "people": people,
                })),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Booking failed: {:?}",
            response.body
        );

        response.data()["id"]
            .as_str()
            .expect("No id in booking response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
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
    /// The `data` payload of a success response
    pub fn data(&self) -> &Value {
        &self.body["data"]
    }

    /// The machine-readable code of an error response
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }

    /// The human-readable message of an error response
    pub fn message(&self) -> &str {
        self.body["message"].as_str().unwrap_or_default()
    }
}
