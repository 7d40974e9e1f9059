//! Seat availability handler.

use axum::Json;
use axum::extract::{Query, State};

use tablebook_core::error::AppError;
use tablebook_service::Availability;

use crate::dto::request::AvailabilityQuery;
use crate::dto::response::ApiResponse;
use crate::state::AppState;

/// GET /availability?date=DD/MM/YYYY
pub async fn check_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<ApiResponse<Availability>>, AppError> {
    let date = query
        .date
        .ok_or_else(|| AppError::validation("Query parameter `date` is required"))?;

    let availability = state.reservation_service.availability(&date).await?;
    Ok(Json(ApiResponse::ok(availability)))
}
