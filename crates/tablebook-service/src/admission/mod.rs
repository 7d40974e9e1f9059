//! Building blocks of the admission decision.

pub mod capacity;
pub mod locks;
pub mod validator;

pub use capacity::CapacityAccountant;
pub use locks::AdmissionLocks;
pub use validator::DateValidator;
