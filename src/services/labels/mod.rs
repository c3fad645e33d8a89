//! Month and weekday label providers.
//!
//! The picker core treats labels as opaque strings; hosts plug in their own
//! locale-aware provider by implementing [`CalendarLabels`].

use chrono::{Month, Weekday};

use crate::services::grid::{weekday_for_column, DAYS_PER_WEEK};

pub trait CalendarLabels {
    /// Name of `month` (1..=12) as shown in the title
    fn month_name(&self, year: i32, month: u32) -> String;

    /// Short symbol used in the weekday header row
    fn weekday_symbol(&self, weekday: Weekday) -> String;

    /// Title line, e.g. "March 2024"
    fn month_title(&self, year: i32, month: u32) -> String {
        format!("{} {}", self.month_name(year, month), year)
    }

    /// Weekday symbols in grid column order
    fn weekday_headers(&self, week_start: Weekday) -> [String; DAYS_PER_WEEK] {
        std::array::from_fn(|column| self.weekday_symbol(weekday_for_column(column, week_start)))
    }
}

/// English month names and single-letter weekday initials
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishLabels;

impl CalendarLabels for EnglishLabels {
    fn month_name(&self, _year: i32, month: u32) -> String {
        u8::try_from(month)
            .ok()
            .and_then(|m| Month::try_from(m).ok())
            .map(|m| m.name().to_string())
            .unwrap_or_default()
    }

    fn weekday_symbol(&self, weekday: Weekday) -> String {
        let symbol = match weekday {
            Weekday::Sun | Weekday::Sat => "S",
            Weekday::Mon => "M",
            Weekday::Tue | Weekday::Thu => "T",
            Weekday::Wed => "W",
            Weekday::Fri => "F",
        };
        symbol.to_string()
    }
}
