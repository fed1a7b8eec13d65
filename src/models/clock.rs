//! Source of "today" for date range checks

use chrono::Local;

use super::date::CalendarDate;

/// Supplies the reference date used by the birth date rules
pub trait Clock: Send + Sync {
    /// Current date as a naive wall-clock date
    fn today(&self) -> CalendarDate;
}

/// Reads the local wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from(Local::now().date_naive())
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
