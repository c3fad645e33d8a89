// Day cell module
// One cell of the month grid, derived on every rebuild

use crate::models::calendar_date::CalendarDate;
use crate::models::mark::MarkColor;

/// Which month a cell belongs to, relative to the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provenance {
    PreviousMonth,
    CurrentMonth,
    NextMonth,
}

/// Background/border state of a cell, highest precedence first.
///
/// The mark dot is drawn on top of any of these and is not part of the
/// precedence chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CellVisual {
    Selected,
    Highlighted,
    Today,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: CalendarDate,
    pub provenance: Provenance,
    /// Zero-based row in the grid
    pub row: usize,
    /// Zero-based column under the configured week start
    pub column: usize,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_marked: bool,
    pub is_highlighted: bool,
    /// Per-date override for the mark colour, `None` uses the board colour
    pub mark_color: Option<MarkColor>,
}

impl DayCell {
    /// Create an unflagged cell
    pub fn new(date: CalendarDate, provenance: Provenance, row: usize, column: usize) -> Self {
        Self {
            date,
            provenance,
            row,
            column,
            is_today: false,
            is_selected: false,
            is_marked: false,
            is_highlighted: false,
            mark_color: None,
        }
    }

    /// Resolve the flags into the single state used for the cell background
    pub fn visual(&self) -> CellVisual {
        if self.is_selected {
            CellVisual::Selected
        } else if self.is_highlighted {
            CellVisual::Highlighted
        } else if self.is_today {
            CellVisual::Today
        } else {
            CellVisual::Plain
        }
    }

    pub fn is_padding(&self) -> bool {
        self.provenance != Provenance::CurrentMonth
    }
}
