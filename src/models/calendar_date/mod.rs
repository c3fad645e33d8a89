// Calendar date module
// Normalized, noon-anchored calendar day used by the grid engine

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PickerError;

/// Hour every `CalendarDate` is anchored to when turned back into a timestamp.
pub const ANCHOR_HOUR: u32 = 12;

/// A single calendar day (year, month, day, weekday).
///
/// Equality, ordering and hashing only look at (year, month, day), so two
/// timestamps on the same day always collapse to the same `CalendarDate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Create a date from its components, `None` when the day does not exist
    ///
    /// # Examples
    /// ```
    /// use month_date_picker::models::calendar_date::CalendarDate;
    ///
    /// assert!(CalendarDate::from_ymd(2024, 2, 29).is_some());
    /// assert!(CalendarDate::from_ymd(2023, 2, 29).is_none());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Truncate a timestamp to its calendar day
    pub fn from_datetime(value: NaiveDateTime) -> Self {
        Self(value.date())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Weekday as 1 = Sunday ..= 7 = Saturday
    pub fn weekday_number(&self) -> u8 {
        weekday_number(self.0.weekday())
    }

    pub fn naive_date(&self) -> NaiveDate {
        self.0
    }

    /// The timestamp this date stands for: the same day at 12:00:00
    pub fn noon(&self) -> NaiveDateTime {
        self.0.and_time(noon_time())
    }

    /// True when both dates share year and month
    pub fn same_month(&self, other: &CalendarDate) -> bool {
        self.year() == other.year() && self.month() == other.month()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(value: NaiveDateTime) -> Self {
        Self::from_datetime(value)
    }
}

impl From<CalendarDate> for NaiveDateTime {
    fn from(date: CalendarDate) -> Self {
        date.noon()
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

fn noon_time() -> NaiveTime {
    NaiveTime::from_hms_opt(ANCHOR_HOUR, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// Convert a chrono weekday to the 1 = Sunday ..= 7 = Saturday numbering
pub fn weekday_number(weekday: Weekday) -> u8 {
    weekday.num_days_from_sunday() as u8 + 1
}

/// Convert a 1 = Sunday ..= 7 = Saturday number back to a weekday
pub fn weekday_from_number(number: u8) -> Result<Weekday, PickerError> {
    match number {
        1 => Ok(Weekday::Sun),
        2 => Ok(Weekday::Mon),
        3 => Ok(Weekday::Tue),
        4 => Ok(Weekday::Wed),
        5 => Ok(Weekday::Thu),
        6 => Ok(Weekday::Fri),
        7 => Ok(Weekday::Sat),
        other => Err(PickerError::InvalidWeekStart(other)),
    }
}
