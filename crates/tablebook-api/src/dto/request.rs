//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use tablebook_service::{CreateReservationRequest, UpdateReservationRequest};

/// Body of `POST /reservation`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateReservationBody {
    /// Customer name.
    #[validate(length(min = 1, message = "Customer name is required"))]
    pub customer: String,
    /// Date as `DD/MM/YYYY`.
    pub date: String,
    /// Number of people.
    #[validate(range(min = 1, message = "Party size must be at least 1"))]
    pub people: i64,
}

impl CreateReservationBody {
    /// Converts to the service request.
    pub fn into_request(self) -> CreateReservationRequest {
        CreateReservationRequest {
            customer: self.customer,
            date: self.date,
            party_size: party_size(self.people),
        }
    }
}

/// Body of `PUT /reservation/{id}`. Omitted fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateReservationBody {
    /// New customer name.
    #[validate(length(min = 1, message = "Customer name must not be empty"))]
    pub customer: Option<String>,
    /// New date as `DD/MM/YYYY`. An empty string counts as omitted.
    pub date: Option<String>,
    /// New number of people.
    #[validate(range(min = 1, message = "Party size must be at least 1"))]
    pub people: Option<i64>,
}

impl UpdateReservationBody {
    /// Converts to the service request.
    pub fn into_request(self) -> UpdateReservationRequest {
        UpdateReservationRequest {
            customer: self.customer,
            date: self.date.filter(|d| !d.is_empty()),
            party_size: self.people.map(party_size),
        }
    }
}

/// Query of `GET /reservations`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListReservationsQuery {
    /// Administrative code.
    pub admin_code: Option<String>,
}

/// Query of `GET /availability`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailabilityQuery {
    /// Date as `DD/MM/YYYY`.
    pub date: Option<String>,
}

/// Values above `u32::MAX` still have to fail the per-booking limit.
fn party_size(people: i64) -> u32 {
    u32::try_from(people.max(0)).unwrap_or(u32::MAX)
}
