//! Reservation stores.

pub mod memory;
pub mod reservation;

use async_trait::async_trait;

use tablebook_core::result::AppResult;
use tablebook_core::traits::Repository;
use tablebook_core::types::{BookingDate, ReservationId};
use tablebook_entity::Reservation;

pub use memory::MemoryReservationStore;
pub use reservation::ReservationRepository;

/// Persistence seam of the admission service.
///
/// Implementations must give read-your-writes consistency: a reservation
/// returned by `create` or `update` is visible to the next `find_by_date`.
#[async_trait]
pub trait ReservationStore: Repository<Reservation, ReservationId> {
    /// All reservations booked on exactly `date`.
    async fn find_by_date(&self, date: BookingDate) -> AppResult<Vec<Reservation>>;
}
