//! Reservation domain entities.

pub mod model;

pub use model::{NewReservation, Reservation, ReservationPatch};
