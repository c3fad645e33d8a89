// Test fixtures - reusable test data
// Provides consistent dates across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use month_date_picker::models::calendar_date::CalendarDate;

/// Calendar day from components
pub fn ymd(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

/// Timestamp from components
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Jan 5, 2024 at 14:30
    pub fn afternoon_jan_5_2024() -> NaiveDateTime {
        at(2024, 1, 5, 14, 30)
    }

    /// Mar 15, 2024 at 09:00; March 2024 starts on a Friday
    pub fn mid_march_2024() -> NaiveDateTime {
        at(2024, 3, 15, 9, 0)
    }

    /// Mar 10, 2024 at 08:00, used as "now"
    pub fn now_march_10_2024() -> NaiveDateTime {
        at(2024, 3, 10, 8, 0)
    }

    /// Dec 31, 2025 at 23:59 (New Year's Eve)
    pub fn new_years_eve_2025() -> NaiveDateTime {
        at(2025, 12, 31, 23, 59)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDateTime {
        at(2024, 2, 29, 12, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_fixture_dates_are_valid() {
        assert_eq!(dates::afternoon_jan_5_2024().day(), 5);
        assert_eq!(dates::mid_march_2024().month(), 3);
        assert_eq!(dates::new_years_eve_2025().day(), 31);
        assert_eq!(dates::leap_day_2024().day(), 29);
    }
}
