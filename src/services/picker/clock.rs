// "Now" sources used to decide which cell is today

use chrono::{Local, NaiveDateTime};

use crate::models::calendar_date::CalendarDate;

pub trait Clock {
    /// Current local wall-clock time
    fn now(&self) -> NaiveDateTime;

    fn today(&self) -> CalendarDate {
        CalendarDate::from_datetime(self.now())
    }
}

/// Reads the system clock in the local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
