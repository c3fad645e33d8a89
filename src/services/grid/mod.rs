//! Calendar grid engine.
//!
//! Pure date arithmetic behind the month grid: month boundaries, month
//! lengths, month/day stepping, weekday-to-column mapping and the ordered
//! list of day cells (leading padding, the month itself, trailing padding).
//! Every function is a pure function of its inputs.

use chrono::{Datelike, TimeDelta, Weekday};

use crate::error::PickerError;
use crate::models::calendar_date::CalendarDate;
use crate::models::day_cell::{DayCell, Provenance};

/// Number of columns in every grid row
pub const DAYS_PER_WEEK: usize = 7;

/// Day 1 of the month containing `date`, with its own weekday
pub fn first_day_of_month(date: CalendarDate) -> CalendarDate {
    date.naive_date()
        .with_day(1)
        .map(CalendarDate::from)
        .unwrap_or(date)
}

/// Number of days in the month identified by `month_cursor`
pub fn days_in_month(month_cursor: CalendarDate) -> u32 {
    month_length(month_cursor.year(), month_cursor.month())
}

fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// Gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Day 1 of the month `delta` months away from `month_cursor`.
///
/// # Examples
/// ```
/// use month_date_picker::models::calendar_date::CalendarDate;
/// use month_date_picker::services::grid::add_months;
///
/// let jan = CalendarDate::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(add_months(jan, -1).unwrap(), CalendarDate::from_ymd(2023, 12, 1).unwrap());
/// ```
pub fn add_months(month_cursor: CalendarDate, delta: i32) -> Result<CalendarDate, PickerError> {
    let total_months =
        i64::from(month_cursor.year()) * 12 + i64::from(month_cursor.month()) - 1 + i64::from(delta);
    let year = total_months.div_euclid(12);
    let month = total_months.rem_euclid(12) + 1;

    i32::try_from(year)
        .ok()
        .and_then(|y| CalendarDate::from_ymd(y, month as u32, 1))
        .ok_or(PickerError::DateOutOfRange { year, month })
}

/// The date `n` days away from `date` (negative `n` moves backwards)
pub fn add_days(date: CalendarDate, n: i64) -> Result<CalendarDate, PickerError> {
    TimeDelta::try_days(n)
        .and_then(|delta| date.naive_date().checked_add_signed(delta))
        .map(CalendarDate::from)
        .ok_or(PickerError::DayOutOfRange { days: n })
}

/// Zero-based grid column of `weekday` when rows start on `week_start`
pub fn column_for_weekday(weekday: Weekday, week_start: Weekday) -> usize {
    let weekday = weekday.num_days_from_sunday() as i32;
    let start = week_start.num_days_from_sunday() as i32;
    (weekday - start).rem_euclid(DAYS_PER_WEEK as i32) as usize
}

/// Same mapping on the 1 = Sunday ..= 7 = Saturday numbering
pub fn column_for_weekday_number(weekday: u8, week_start_day: u8) -> usize {
    ((i32::from(weekday) - i32::from(week_start_day)) % 7 + 7) as usize % DAYS_PER_WEEK
}

/// Weekday shown in `column` when rows start on `week_start`
pub fn weekday_for_column(column: usize, week_start: Weekday) -> Weekday {
    (0..column % DAYS_PER_WEEK).fold(week_start, |day, _| day.succ())
}

/// Padding days borrowed from the previous month (0..=6)
pub fn leading_days(month_cursor: CalendarDate, week_start: Weekday) -> usize {
    column_for_weekday(first_day_of_month(month_cursor).weekday(), week_start)
}

/// Padding days borrowed from the next month (0..=6)
pub fn trailing_days(month_cursor: CalendarDate, week_start: Weekday) -> usize {
    let leading = leading_days(month_cursor, week_start);
    let last_column = (leading + days_in_month(month_cursor) as usize - 1) % DAYS_PER_WEEK;
    DAYS_PER_WEEK - 1 - last_column
}

/// Number of rows the month occupies (4, 5 or 6)
pub fn rows_in_month(month_cursor: CalendarDate, week_start: Weekday) -> usize {
    let total = leading_days(month_cursor, week_start)
        + days_in_month(month_cursor) as usize
        + trailing_days(month_cursor, week_start);
    total / DAYS_PER_WEEK
}

/// Ordered day cells for the month of `month_cursor`.
///
/// The first cell sits in column 0, the last in column 6, and the length is
/// always a multiple of seven. Cells come back unflagged.
pub fn build_month_grid(
    month_cursor: CalendarDate,
    week_start: Weekday,
) -> Result<Vec<DayCell>, PickerError> {
    let first = first_day_of_month(month_cursor);
    let in_month = days_in_month(first) as usize;
    let leading = leading_days(first, week_start);
    let trailing = trailing_days(first, week_start);
    let total = leading + in_month + trailing;

    let mut date = add_days(first, -(leading as i64))?;
    let mut cells = Vec::with_capacity(total);

    for index in 0..total {
        let provenance = if index < leading {
            Provenance::PreviousMonth
        } else if index < leading + in_month {
            Provenance::CurrentMonth
        } else {
            Provenance::NextMonth
        };

        cells.push(DayCell::new(
            date,
            provenance,
            index / DAYS_PER_WEEK,
            index % DAYS_PER_WEEK,
        ));

        if index + 1 < total {
            date = add_days(date, 1)?;
        }
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_first_day_of_month_recomputes_weekday() {
        // 2024-04-17 is a Wednesday, 2024-04-01 a Monday
        let first = first_day_of_month(ymd(2024, 4, 17));
        assert_eq!(first, ymd(2024, 4, 1));
        assert_eq!(first.weekday(), Weekday::Mon);
    }

    #[test_case(2024, 1, 31; "january")]
    #[test_case(2024, 2, 29; "leap february")]
    #[test_case(2023, 2, 28; "common february")]
    #[test_case(2000, 2, 29; "february 2000 is leap")]
    #[test_case(1900, 2, 28; "february 1900 is not leap")]
    #[test_case(2024, 4, 30; "april")]
    #[test_case(2024, 6, 30; "june")]
    #[test_case(2024, 9, 30; "september")]
    #[test_case(2024, 11, 30; "november")]
    #[test_case(2024, 12, 31; "december")]
    fn test_days_in_month(year: i32, month: u32, expected: u32) {
        assert_eq!(days_in_month(ymd(year, month, 1)), expected);
    }

    #[test]
    fn test_add_months_rolls_years_both_ways() {
        assert_eq!(add_months(ymd(2024, 1, 1), -1).unwrap(), ymd(2023, 12, 1));
        assert_eq!(add_months(ymd(2023, 12, 1), 1).unwrap(), ymd(2024, 1, 1));
        assert_eq!(add_months(ymd(2024, 5, 1), 25).unwrap(), ymd(2026, 6, 1));
        assert_eq!(add_months(ymd(2024, 5, 1), -29).unwrap(), ymd(2021, 12, 1));
        assert_eq!(add_months(ymd(2024, 5, 1), 0).unwrap(), ymd(2024, 5, 1));
    }

    #[test]
    fn test_add_months_clamps_to_first_day() {
        assert_eq!(add_months(ymd(2024, 1, 31), 1).unwrap(), ymd(2024, 2, 1));
    }

    #[test]
    fn test_add_months_out_of_range_is_error() {
        let last_supported = first_day_of_month(CalendarDate::from(chrono::NaiveDate::MAX));
        assert!(matches!(
            add_months(last_supported, 1),
            Err(PickerError::DateOutOfRange { .. })
        ));
        assert!(matches!(
            add_months(ymd(2024, 1, 1), i32::MAX),
            Err(PickerError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn test_add_days_crosses_boundaries() {
        assert_eq!(add_days(ymd(2023, 12, 31), 1).unwrap(), ymd(2024, 1, 1));
        assert_eq!(add_days(ymd(2024, 3, 1), -1).unwrap(), ymd(2024, 2, 29));
        assert_eq!(add_days(ymd(2024, 1, 1), -366).unwrap(), ymd(2022, 12, 31));
        assert_eq!(add_days(ymd(2024, 1, 1), 0).unwrap(), ymd(2024, 1, 1));
    }

    #[test]
    fn test_add_days_out_of_range_is_error() {
        assert!(add_days(ymd(2024, 1, 1), i64::MAX).is_err());
        assert!(add_days(CalendarDate::from(chrono::NaiveDate::MIN), -1).is_err());
    }

    #[test]
    fn test_column_for_weekday() {
        assert_eq!(column_for_weekday(Weekday::Mon, Weekday::Mon), 0);
        assert_eq!(column_for_weekday(Weekday::Sun, Weekday::Mon), 6);
        assert_eq!(column_for_weekday(Weekday::Sun, Weekday::Sun), 0);
        assert_eq!(column_for_weekday(Weekday::Sat, Weekday::Sun), 6);
        assert_eq!(column_for_weekday(Weekday::Tue, Weekday::Sat), 3);
        assert_eq!(column_for_weekday_number(1, 2), 6);
        assert_eq!(column_for_weekday_number(4, 4), 0);
    }

    #[test]
    fn test_weekday_for_column_inverts_column() {
        for start in [Weekday::Sun, Weekday::Mon, Weekday::Thu, Weekday::Sat] {
            for column in 0..DAYS_PER_WEEK {
                let weekday = weekday_for_column(column, start);
                assert_eq!(column_for_weekday(weekday, start), column);
            }
        }
    }

    #[test]
    fn test_march_2024_monday_start() {
        // 2024-03-01 is a Friday and 2024-03-31 a Sunday
        let grid = build_month_grid(ymd(2024, 3, 1), Weekday::Mon).unwrap();
        assert_eq!(grid.len(), 35);

        let leading: Vec<_> = grid
            .iter()
            .take_while(|c| c.provenance == Provenance::PreviousMonth)
            .map(|c| c.date)
            .collect();
        assert_eq!(
            leading,
            vec![ymd(2024, 2, 26), ymd(2024, 2, 27), ymd(2024, 2, 28), ymd(2024, 2, 29)]
        );
        assert_eq!(grid[4].date, ymd(2024, 3, 1));
        assert_eq!((grid[4].row, grid[4].column), (0, 4));

        let last = grid.last().unwrap();
        assert_eq!(last.date, ymd(2024, 3, 31));
        assert_eq!(last.provenance, Provenance::CurrentMonth);
        assert_eq!(last.column, 6);
    }

    #[test]
    fn test_no_leading_padding_when_month_starts_on_week_start() {
        // 2024-04-01 is a Monday
        let grid = build_month_grid(ymd(2024, 4, 10), Weekday::Mon).unwrap();
        assert_eq!(leading_days(ymd(2024, 4, 1), Weekday::Mon), 0);
        assert_eq!(grid[0].date, ymd(2024, 4, 1));
        assert_eq!(grid[0].provenance, Provenance::CurrentMonth);
        assert_eq!(grid[0].column, 0);
    }

    #[test]
    fn test_no_trailing_padding_when_month_ends_on_week_end() {
        // 2024-08-31 is a Saturday
        assert_eq!(trailing_days(ymd(2024, 8, 1), Weekday::Sun), 0);
        let grid = build_month_grid(ymd(2024, 8, 1), Weekday::Sun).unwrap();
        assert_eq!(grid.last().unwrap().date, ymd(2024, 8, 31));
        assert!(grid.iter().all(|c| c.provenance != Provenance::NextMonth));
    }

    #[test]
    fn test_full_week_of_padding_never_appears() {
        // 2024-06-01 is a Saturday: six leading days with a Sunday start
        assert_eq!(leading_days(ymd(2024, 6, 1), Weekday::Sun), 6);
        // Seven would be a wasted row; with a Saturday start it is zero
        assert_eq!(leading_days(ymd(2024, 6, 1), Weekday::Sat), 0);
    }

    #[test]
    fn test_four_row_february() {
        // 2026-02-01 is a Sunday and February 2026 has 28 days
        let grid = build_month_grid(ymd(2026, 2, 1), Weekday::Sun).unwrap();
        assert_eq!(grid.len(), 28);
        assert_eq!(rows_in_month(ymd(2026, 2, 1), Weekday::Sun), 4);
        assert!(grid.iter().all(|c| !c.is_padding()));
    }

    #[test]
    fn test_six_row_month() {
        // 2024-06-01 is a Saturday, 30 days, Sunday start: 6 + 30 + 6 = 42
        let grid = build_month_grid(ymd(2024, 6, 1), Weekday::Sun).unwrap();
        assert_eq!(grid.len(), 42);
        assert_eq!(grid.last().unwrap().date, ymd(2024, 7, 6));
        assert_eq!(grid.last().unwrap().provenance, Provenance::NextMonth);
    }

    #[test]
    fn test_grid_columns_match_weekdays() {
        let grid = build_month_grid(ymd(2025, 11, 1), Weekday::Wed).unwrap();
        for cell in &grid {
            assert_eq!(cell.column, column_for_weekday(cell.date.weekday(), Weekday::Wed));
        }
    }

    #[test]
    fn test_grid_is_deterministic() {
        let a = build_month_grid(ymd(2025, 7, 9), Weekday::Fri).unwrap();
        let b = build_month_grid(ymd(2025, 7, 30), Weekday::Fri).unwrap();
        assert_eq!(a, b);
    }
}
