//! Time sources for the record date and response timestamps.
//!
//! The encoder never reads the system clock directly; it asks a
//! [`Clock`]. Production wiring uses [`SystemClock`], tests pin the
//! date with [`FixedClock`].

use std::sync::Arc;

use chrono::{Local, NaiveDate, NaiveDateTime};

/// A source of local wall-clock time.
pub trait Clock: Send + Sync {
    /// Current local date and time, without an offset.
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }
}

/// Reads the host clock in the process's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDateTime);

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        FixedClock(at)
    }

    /// Midnight on the given calendar date, or `None` if it doesn't exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(FixedClock)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_reports_its_date() {
        let clock = FixedClock::from_ymd(2024, 3, 5).unwrap();
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn invalid_calendar_dates_are_rejected() {
        assert!(FixedClock::from_ymd(2023, 2, 29).is_none());
    }

    #[test]
    fn shared_clock_delegates() {
        let clock: Arc<dyn Clock> = Arc::new(FixedClock::from_ymd(2030, 12, 31).unwrap());
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2030, 12, 31).unwrap());
    }
}
