//! Typed path parameter helpers.

use tablebook_core::error::AppError;
use tablebook_core::types::ReservationId;

/// Parses a reservation id from a path segment.
pub fn parse_reservation_id(s: &str) -> Result<ReservationId, AppError> {
    s.parse()
}
