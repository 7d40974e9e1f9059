//! # tablebook-entity
//!
//! Domain entity models for Tablebook. Database entities derive
//! `sqlx::FromRow` in addition to `Serialize`/`Deserialize`.

pub mod reservation;

pub use reservation::{NewReservation, Reservation, ReservationPatch};
