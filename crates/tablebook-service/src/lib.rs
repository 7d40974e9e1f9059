//! # tablebook-service
//!
//! Reservation admission control for Tablebook. The service validates
//! requested dates against the establishment's opening days, accounts for
//! daily occupancy, and orchestrates create/update/delete against a
//! [`ReservationStore`](tablebook_database::ReservationStore).
//!
//! Services follow constructor injection: the store, the immutable
//! [`BookingConfig`](tablebook_core::config::BookingConfig), and the clock
//! are provided at construction time.

pub mod admission;
pub mod reservation;

pub use admission::{AdmissionLocks, CapacityAccountant, DateValidator};
pub use reservation::{
    Availability, CreateReservationRequest, ReservationService, UpdateReservationRequest,
};
