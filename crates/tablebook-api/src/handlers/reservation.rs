//! Reservation CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;

use tablebook_core::error::AppError;
use tablebook_entity::Reservation;

use crate::dto::request::{CreateReservationBody, ListReservationsQuery, UpdateReservationBody};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::extractors::{ValidatedJson, parse_reservation_id};
use crate::state::AppState;

/// POST /reservation
pub async fn create_reservation(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<CreateReservationBody>,
) -> Result<(StatusCode, Json<ApiResponse<Reservation>>), AppError> {
    let reservation = state
        .reservation_service
        .create(body.into_request())
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(reservation))))
}

/// GET /reservations?admin_code=...
pub async fn list_reservations(
    State(state): State<AppState>,
    Query(query): Query<ListReservationsQuery>,
) -> Result<Json<ApiResponse<Vec<Reservation>>>, AppError> {
    let code = query.admin_code.unwrap_or_default();
    let reservations = state.reservation_service.list(&code).await?;
    Ok(Json(ApiResponse::ok(reservations)))
}

/// GET /reservation/{id}
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Reservation>>, AppError> {
    let id = parse_reservation_id(&id)?;
    let reservation = state.reservation_service.get(&id).await?;
    Ok(Json(ApiResponse::ok(reservation)))
}

/// PUT /reservation/{id}
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(body): ValidatedJson<UpdateReservationBody>,
) -> Result<Json<ApiResponse<Reservation>>, AppError> {
    let id = parse_reservation_id(&id)?;
    let reservation = state
        .reservation_service
        .update(&id, body.into_request())
        .await?;
    Ok(Json(ApiResponse::ok(reservation)))
}

/// DELETE /reservation/{id}
pub async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    let id = parse_reservation_id(&id)?;
    state.reservation_service.delete(&id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Reservation cancelled successfully".to_string(),
    })))
}
