//! In-memory reservation store for tests and single-node runs without a database.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use tablebook_core::error::AppError;
use tablebook_core::result::AppResult;
use tablebook_core::traits::Repository;
use tablebook_core::types::{BookingDate, ReservationId};
use tablebook_entity::Reservation;

use super::ReservationStore;

/// Reservation store backed by a vector behind a Tokio `RwLock`.
///
/// Listing returns reservations in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryReservationStore {
    rows: Arc<RwLock<Vec<Reservation>>>,
}

impl MemoryReservationStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Reservation, ReservationId> for MemoryReservationStore {
    async fn find_by_id(&self, id: &ReservationId) -> AppResult<Option<Reservation>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().find(|r| &r.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        Ok(self.rows.read().await.clone())
    }

    async fn create(&self, entity: &Reservation) -> AppResult<Reservation> {
        let mut rows = self.rows.write().await;
        if rows.iter().any(|r| r.id == entity.id) {
            return Err(AppError::conflict(format!(
                "Reservation id {} is already taken",
                entity.id
            )));
        }
        rows.push(entity.clone());
        debug!(reservation_id = %entity.id, rows = rows.len(), "Reservation stored");
        Ok(entity.clone())
    }

    async fn update(&self, entity: &Reservation) -> AppResult<Reservation> {
        let mut rows = self.rows.write().await;
        let slot = rows
            .iter_mut()
            .find(|r| r.id == entity.id)
            .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", entity.id)))?;
        *slot = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: &ReservationId) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| &r.id != id);
        Ok(rows.len() < before)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.read().await.len() as u64)
    }
}

#[async_trait]
impl ReservationStore for MemoryReservationStore {
    async fn find_by_date(&self, date: BookingDate) -> AppResult<Vec<Reservation>> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|r| r.date == date).cloned().collect())
    }
}
