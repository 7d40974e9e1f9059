//! # tablebook-database
//!
//! PostgreSQL connection management, migrations, and the reservation
//! stores consumed by the admission service: a sqlx-backed repository and
//! a process-local store for tests and database-less runs.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemoryReservationStore, ReservationRepository, ReservationStore};
