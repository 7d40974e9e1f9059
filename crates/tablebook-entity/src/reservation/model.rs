//! Reservation entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use tablebook_core::types::{BookingDate, ReservationId};

/// A booking for one party on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: ReservationId,
    /// Name the booking is held under.
    pub customer: String,
    /// Date of the visit.
    pub date: BookingDate,
    /// Number of people in the party.
    #[serde(rename = "people")]
    #[sqlx(try_from = "i32")]
    pub party_size: u32,
}

impl Reservation {
    /// Build the stored record for a freshly admitted booking.
    pub fn admit(id: ReservationId, data: NewReservation) -> Self {
        Self {
            id,
            customer: data.customer,
            date: data.date,
            party_size: data.party_size,
        }
    }

    /// Apply a patch, keeping fields the patch leaves out.
    pub fn apply(&mut self, patch: ReservationPatch) {
        if let Some(customer) = patch.customer {
            self.customer = customer;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(party_size) = patch.party_size {
            self.party_size = party_size;
        }
    }
}

/// Data required to create a reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    /// Customer name.
    pub customer: String,
    /// Requested date.
    pub date: BookingDate,
    /// Party size.
    #[serde(rename = "people")]
    pub party_size: u32,
}

/// Partial update of a reservation. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationPatch {
    /// New customer name.
    pub customer: Option<String>,
    /// New date.
    pub date: Option<BookingDate>,
    /// New party size.
    #[serde(rename = "people")]
    pub party_size: Option<u32>,
}
