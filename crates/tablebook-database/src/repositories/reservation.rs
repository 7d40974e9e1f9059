//! PostgreSQL reservation repository.

use async_trait::async_trait;
use sqlx::PgPool;

use tablebook_core::error::{AppError, ErrorKind};
use tablebook_core::result::AppResult;
use tablebook_core::traits::Repository;
use tablebook_core::types::{BookingDate, ReservationId};
use tablebook_entity::Reservation;

use super::ReservationStore;

/// Repository for reservation rows.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<Reservation, ReservationId> for ReservationRepository {
    async fn find_by_id(&self, id: &ReservationId) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find reservation", e))
    }

    async fn find_all(&self) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations ORDER BY date, id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list reservations", e)
            })
    }

    async fn create(&self, entity: &Reservation) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (id, customer, date, party_size) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&entity.id)
        .bind(&entity.customer)
        .bind(entity.date)
        .bind(party_size_column(entity.party_size)?)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation()) {
                AppError::with_source(
                    ErrorKind::Conflict,
                    format!("Reservation id {} is already taken", entity.id),
                    e,
                )
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create reservation", e)
            }
        })
    }

    async fn update(&self, entity: &Reservation) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET customer = $2, date = $3, party_size = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(&entity.id)
        .bind(&entity.customer)
        .bind(entity.date)
        .bind(party_size_column(entity.party_size)?)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update reservation", e))?
        .ok_or_else(|| AppError::not_found(format!("Reservation {} not found", entity.id)))
    }

    async fn delete(&self, id: &ReservationId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reservation", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reservations")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count reservations", e)
            })?;
        Ok(total as u64)
    }
}

#[async_trait]
impl ReservationStore for ReservationRepository {
    async fn find_by_date(&self, date: BookingDate) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE date = $1 ORDER BY id")
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list reservations by date", e)
            })
    }
}

/// Postgres has no unsigned integers; the column is `INTEGER`.
fn party_size_column(party_size: u32) -> AppResult<i32> {
    i32::try_from(party_size)
        .map_err(|_| AppError::validation(format!("Party size {party_size} is out of range")))
}
