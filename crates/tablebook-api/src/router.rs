//! Route definitions for the reservation HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Builds the router with every route and the request logger.
///
/// Transport layers (CORS, tracing, timeout) are added by
/// [`build_app`](crate::app::build_app).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(reservation_routes())
        .merge(availability_routes())
        .merge(health_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Reservation CRUD and the admin listing.
fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reservation",
            post(handlers::reservation::create_reservation),
        )
        .route(
            "/reservation/{id}",
            get(handlers::reservation::get_reservation)
                .put(handlers::reservation::update_reservation)
                .delete(handlers::reservation::delete_reservation),
        )
        .route(
            "/reservations",
            get(handlers::reservation::list_reservations),
        )
}

fn availability_routes() -> Router<AppState> {
    Router::new().route(
        "/availability",
        get(handlers::availability::check_availability),
    )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
