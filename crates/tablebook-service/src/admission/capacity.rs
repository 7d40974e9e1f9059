//! Daily occupancy accounting.

use std::sync::Arc;

use tablebook_core::result::AppResult;
use tablebook_core::types::{BookingDate, ReservationId};
use tablebook_database::ReservationStore;

/// Sums party sizes per date straight from the store.
///
/// Nothing is cached: every call scans the reservations of that date, so
/// the figure always matches persisted state. The cost grows with the
/// number of bookings per day.
#[derive(Clone)]
pub struct CapacityAccountant {
    store: Arc<dyn ReservationStore>,
    daily_capacity: u32,
}

impl CapacityAccountant {
    /// Creates an accountant over `store` with the given daily limit.
    pub fn new(store: Arc<dyn ReservationStore>, daily_capacity: u32) -> Self {
        Self {
            store,
            daily_capacity,
        }
    }

    /// Total party size already booked on `date`.
    pub async fn occupancy_for_date(&self, date: BookingDate) -> AppResult<u32> {
        self.occupancy_excluding(date, None).await
    }

    /// Total party size booked on `date` by everyone except `exclude`.
    ///
    /// The excluded reservation is matched by id in the same scan, so its
    /// seats only leave the sum if it is actually stored on that date.
    pub async fn occupancy_excluding(
        &self,
        date: BookingDate,
        exclude: Option<&ReservationId>,
    ) -> AppResult<u32> {
        let booked = self.store.find_by_date(date).await?;
        Ok(booked
            .iter()
            .filter(|r| Some(&r.id) != exclude)
            .map(|r| r.party_size)
            .sum())
    }

    /// Seats left on a day with the given occupancy.
    pub fn remaining(&self, occupancy: u32) -> u32 {
        self.daily_capacity.saturating_sub(occupancy)
    }

    /// Whether `party_size` more people fit next to `occupancy`.
    pub fn fits(&self, occupancy: u32, party_size: u32) -> bool {
        occupancy.saturating_add(party_size) <= self.daily_capacity
    }
}
