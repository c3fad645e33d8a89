// Error types for the date picker core

use thiserror::Error;

/// Failures surfaced by the grid engine and the picker controller.
///
/// Every variant is a local contract violation; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    /// Week start outside 1 (Sunday) ..= 7 (Saturday)
    #[error("week start day must be between 1 (Sunday) and 7 (Saturday), got {0}")]
    InvalidWeekStart(u8),

    /// Month arithmetic left the representable calendar range
    #[error("month {year}-{month:02} is outside the supported date range")]
    DateOutOfRange { year: i64, month: i64 },

    /// Day arithmetic left the representable calendar range
    #[error("cannot move {days} days from the given date")]
    DayOutOfRange { days: i64 },

    /// Colour string that is not `#RRGGBB` / `#RGB`
    #[error("invalid colour '{0}', expected #RRGGBB or #RGB")]
    InvalidColor(String),

    /// Layout settings that cannot produce a grid
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// Grid index past the end of the current grid
    #[error("cell index {index} is outside the grid of {len} cells")]
    CellOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, PickerError>;
