//! Admission rules for the establishment.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Capacity limits, opening days, and the administrative code.
///
/// Built once at startup and handed to the reservation service; nothing
/// mutates it afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Maximum total party size accepted for a single date.
    #[serde(default = "default_daily_capacity")]
    pub daily_capacity: u32,
    /// Maximum party size of a single reservation.
    #[serde(default = "default_max_party_size")]
    pub max_party_size: u32,
    /// Weekdays on which reservations are accepted.
    ///
    /// Defaults to Thursday, Friday, and Saturday. Any non-empty set is
    /// accepted; it need not be three days or consecutive.
    #[serde(default = "default_open_weekdays")]
    pub open_weekdays: Vec<Weekday>,
    /// Code required to list every reservation.
    #[serde(default = "default_admin_code")]
    pub admin_code: String,
    /// Length of generated reservation identifiers.
    #[serde(default = "default_id_length")]
    pub id_length: usize,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            daily_capacity: default_daily_capacity(),
            max_party_size: default_max_party_size(),
            open_weekdays: default_open_weekdays(),
            admin_code: default_admin_code(),
            id_length: default_id_length(),
        }
    }
}

impl BookingConfig {
    /// Whether reservations are accepted on the given weekday.
    pub fn is_open_on(&self, weekday: Weekday) -> bool {
        self.open_weekdays.contains(&weekday)
    }

    /// Check the rules for internal consistency.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.daily_capacity == 0 {
            return Err(AppError::configuration("booking.daily_capacity must be positive"));
        }
        if self.max_party_size == 0 {
            return Err(AppError::configuration("booking.max_party_size must be positive"));
        }
        if self.max_party_size > self.daily_capacity {
            return Err(AppError::configuration(format!(
                "booking.max_party_size ({}) exceeds booking.daily_capacity ({})",
                self.max_party_size, self.daily_capacity
            )));
        }
        if self.open_weekdays.is_empty() {
            return Err(AppError::configuration("booking.open_weekdays must not be empty"));
        }
        if self.admin_code.trim().is_empty() {
            return Err(AppError::configuration("booking.admin_code must not be empty"));
        }
        if !(4..=32).contains(&self.id_length) {
            return Err(AppError::configuration(format!(
                "booking.id_length must be between 4 and 32, got {}",
                self.id_length
            )));
        }
        Ok(())
    }
}

fn default_daily_capacity() -> u32 {
    60
}

fn default_max_party_size() -> u32 {
    20
}

fn default_open_weekdays() -> Vec<Weekday> {
    vec![Weekday::Thu, Weekday::Fri, Weekday::Sat]
}

fn default_admin_code() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_id_length() -> usize {
    12
}
