//! Calendar date sources

use chrono::{Local, NaiveDate};
use std::cell::Cell;

use super::DayKey;

/// Provides the current local calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Storage key for the current day
    fn today_key(&self) -> DayKey {
        DayKey::for_date(self.today())
    }
}

/// The system's local time zone
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock that only moves when told to
#[derive(Debug, Clone)]
pub struct FixedClock {
    date: Cell<NaiveDate>,
}

impl FixedClock {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Cell::new(date),
        }
    }

    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }

    /// Move forward by one day
    pub fn advance_day(&self) {
        if let Some(next) = self.date.get().succ_opt() {
            self.date.set(next);
        }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}
