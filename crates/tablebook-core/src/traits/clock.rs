//! Source of "today" for date validation.

use chrono::{Local, NaiveDate};

/// Abstracts the current calendar date so admission rules are testable.
pub trait Clock: Send + Sync + 'static {
    /// The current date, without a time component.
    fn today(&self) -> NaiveDate;
}

/// Host local date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
