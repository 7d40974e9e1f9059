//! Health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::state::AppState;

/// GET /health
///
/// Answers 503 when the PostgreSQL backend is configured but unreachable.
pub async fn health(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let (database, latency) = match &state.database {
        None => ("disabled", None),
        Some(pool) => match pool.ping().await {
            Ok(elapsed) => ("ok", Some(elapsed.as_millis() as u64)),
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                ("unreachable", None)
            }
        },
    };
    let healthy = database != "unreachable";

    let body = HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        database: database.to_string(),
        database_latency_ms: latency,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ApiResponse {
            success: healthy,
            data: body,
        }),
    )
}
