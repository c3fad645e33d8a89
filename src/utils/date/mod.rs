// Date utility functions

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::calendar_date::CalendarDate;

/// Put `date` on the clock time of `time_source`.
///
/// Used when the user picks a day: the day changes, hour/minute/second stay.
pub fn with_time_of(date: CalendarDate, time_source: NaiveDateTime) -> NaiveDateTime {
    date.naive_date().and_time(time_source.time())
}

/// Format as yyyy-MM-dd
pub fn short_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
