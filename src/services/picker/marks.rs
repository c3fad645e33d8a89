// Marked dates, keyed by calendar day

use std::collections::BTreeMap;

use crate::models::calendar_date::CalendarDate;
use crate::models::mark::MarkColor;

/// Set of marked days with an optional colour per day.
///
/// Keys are calendar days, so marking the same day at different times of
/// day collapses to one entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkSet {
    marks: BTreeMap<CalendarDate, Option<MarkColor>>,
}

impl MarkSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `date`, replacing any previous colour. Returns true when the set changed.
    pub fn insert(&mut self, date: CalendarDate, color: Option<MarkColor>) -> bool {
        self.marks.insert(date, color) != Some(color)
    }

    /// Returns true when `date` was marked
    pub fn remove(&mut self, date: &CalendarDate) -> bool {
        self.marks.remove(date).is_some()
    }

    /// Returns true when anything was removed
    pub fn clear(&mut self) -> bool {
        let had_marks = !self.marks.is_empty();
        self.marks.clear();
        had_marks
    }

    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.marks.contains_key(date)
    }

    /// Colour override for a marked day; `None` for unmarked days or board colour
    pub fn color_of(&self, date: &CalendarDate) -> Option<MarkColor> {
        self.marks.get(date).copied().flatten()
    }

    pub fn len(&self) -> usize {
        self.marks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Marked days in ascending order
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.marks.keys().copied()
    }
}
