//! Core type definitions used across the Tablebook workspace.

pub mod date;
pub mod id;

pub use date::BookingDate;
pub use id::ReservationId;
