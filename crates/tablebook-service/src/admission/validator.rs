//! Business-day validation of requested dates.

use std::sync::Arc;

use chrono::Weekday;
use tracing::debug;

use tablebook_core::config::BookingConfig;
use tablebook_core::error::AppError;
use tablebook_core::result::AppResult;
use tablebook_core::traits::Clock;
use tablebook_core::types::BookingDate;

/// Checks that a date is well formed, not in the past, and on an open day.
#[derive(Clone)]
pub struct DateValidator {
    config: Arc<BookingConfig>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for DateValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateValidator")
            .field("open_weekdays", &self.config.open_weekdays)
            .finish_non_exhaustive()
    }
}

impl DateValidator {
    /// Creates a validator for the open weekdays of `config`.
    pub fn new(config: Arc<BookingConfig>, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }

    /// Parses and validates a `DD/MM/YYYY` string.
    ///
    /// Rules apply in order: format, then past date, then weekday.
    pub fn validate(&self, raw: &str) -> AppResult<BookingDate> {
        let date: BookingDate = raw.parse()?;
        self.check(date)?;
        Ok(date)
    }

    /// Validates an already parsed date against today and the open days.
    pub fn check(&self, date: BookingDate) -> AppResult<()> {
        let today = self.clock.today();
        if date.as_naive() < today {
            debug!(%date, %today, "Rejected date in the past");
            return Err(AppError::past_date("The date cannot be in the past."));
        }

        if !self.config.is_open_on(date.weekday()) {
            debug!(%date, weekday = %date.weekday(), "Rejected closed weekday");
            return Err(AppError::closed_day(format!(
                "We only take reservations on {}.",
                describe_weekdays(&self.config.open_weekdays)
            )));
        }

        Ok(())
    }
}

fn describe_weekdays(days: &[Weekday]) -> String {
    days.iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
