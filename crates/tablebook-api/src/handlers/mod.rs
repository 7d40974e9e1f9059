//! Request handlers.

pub mod availability;
pub mod health;
pub mod reservation;
