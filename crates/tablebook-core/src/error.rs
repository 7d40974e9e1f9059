//! Unified application error types for Tablebook.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator. Admission rejections carry their own
//! [`ErrorKind`] so callers can tell a closed day from a full one without
//! parsing messages.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The date string does not match `DD/MM/YYYY` or names no real day.
    InvalidFormat,
    /// The date lies strictly before today.
    PastDate,
    /// The date falls on a weekday the establishment is closed.
    ClosedDay,
    /// A single booking asks for more seats than one reservation may hold.
    PartySizeTooLarge,
    /// Accepting the booking would push the day over its capacity.
    DailyCapacityExceeded,
    /// Any other input validation failure.
    Validation,
    /// The requested resource was not found.
    NotFound,
    /// The administrative code was missing or wrong.
    Unauthorized,
    /// A conflict occurred (duplicate identifier).
    Conflict,
    /// A database error occurred.
    Database,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether this kind rejects the request as a client error.
    ///
    /// Every rejection answers 400; the remaining client errors carry
    /// their own status.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat
                | Self::PastDate
                | Self::ClosedDay
                | Self::PartySizeTooLarge
                | Self::DailyCapacityExceeded
                | Self::Validation
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat => write!(f, "INVALID_FORMAT"),
            Self::PastDate => write!(f, "PAST_DATE"),
            Self::ClosedDay => write!(f, "CLOSED_DAY"),
            Self::PartySizeTooLarge => write!(f, "PARTY_SIZE_TOO_LARGE"),
            Self::DailyCapacityExceeded => write!(f, "DAILY_CAPACITY_EXCEEDED"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Unauthorized => write!(f, "UNAUTHORIZED"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Database => write!(f, "DATABASE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout Tablebook.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-date-format error.
    pub fn invalid_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidFormat, message)
    }

    /// Create a past-date error.
    pub fn past_date(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::PastDate, message)
    }

    /// Create a closed-day error.
    pub fn closed_day(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ClosedDay, message)
    }

    /// Create a party-size-too-large error.
    pub fn party_size_too_large(max_party_size: u32) -> Self {
        Self::new(
            ErrorKind::PartySizeTooLarge,
            format!("Max people allowed per reservation: {max_party_size}"),
        )
    }

    /// Create a daily-capacity error reporting the seats still free.
    pub fn daily_capacity_exceeded(remaining: u32) -> Self {
        Self::new(
            ErrorKind::DailyCapacityExceeded,
            format!("Capacity exceeded for this date. Only {remaining} spots remaining."),
        )
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Create an unauthorized error.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// Create a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, message)
    }

    /// Create a database error.
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Database, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
