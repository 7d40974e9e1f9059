//! # tablebook-core
//!
//! Core crate for Tablebook. Contains configuration schemas, typed values
//! (reservation identifiers and booking dates), the repository and clock
//! traits, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Tablebook crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
