//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use tablebook_core::error::{AppError, ErrorKind};

use crate::dto::response::ApiErrorResponse;

/// HTTP status and machine-readable code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    let status = match kind {
        kind if kind.is_rejection() => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let code = match kind {
        ErrorKind::InvalidFormat => "INVALID_FORMAT",
        ErrorKind::PastDate => "PAST_DATE",
        ErrorKind::ClosedDay => "CLOSED_DAY",
        ErrorKind::PartySizeTooLarge => "PARTY_SIZE_TOO_LARGE",
        ErrorKind::DailyCapacityExceeded => "DAILY_CAPACITY_EXCEEDED",
        ErrorKind::Validation => "VALIDATION_ERROR",
        ErrorKind::NotFound => "NOT_FOUND",
        ErrorKind::Unauthorized => "UNAUTHORIZED",
        ErrorKind::Conflict => "CONFLICT",
        ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization
        | ErrorKind::Internal => "INTERNAL_ERROR",
    };

    (status, code)
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_code) = status_for(self.kind);

        let message = if status.is_server_error() {
            tracing::error!(kind = %self.kind, error = %self.message, "Internal server error");
            "Internal server error".to_string()
        } else {
            self.message
        };

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
