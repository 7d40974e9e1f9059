//! Reservation use cases.

pub mod service;

pub use service::{
    Availability, CreateReservationRequest, ReservationService, UpdateReservationRequest,
};
