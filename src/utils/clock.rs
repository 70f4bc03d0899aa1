//! Current-date sources.
//!
//! The picker never reads the system clock directly; it asks a [`Clock`] so
//! that "today" can be pinned in tests and demos.

use chrono::NaiveDate;

use super::date::today_local;

/// Supplies the current calendar day.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local-time clock backed by `chrono::Local`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        today_local()
    }
}

/// Clock frozen on a single day.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
