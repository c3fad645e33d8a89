//! Picker state controller.
//!
//! Owns the selected timestamp, the displayed month, the week start and the
//! marked days, and keeps the derived grid of day cells in step with them.
//! Every mutator is a synchronous transition: the new state is computed,
//! the grid is rebuilt, and only then is the host notified.

mod clock;
mod listener;
mod marks;

pub use clock::{Clock, FixedClock, SystemClock};
pub use listener::{DatePickerListener, PickerEvent};
pub use marks::MarkSet;

#[cfg(test)]
pub use listener::MockDatePickerListener;

use chrono::{NaiveDateTime, Weekday};
use log::debug;

use crate::error::PickerError;
use crate::models::calendar_date::{weekday_from_number, CalendarDate};
use crate::models::day_cell::{DayCell, Provenance};
use crate::models::mark::MarkColor;
use crate::models::settings::PickerSettings;
use crate::services::grid::{add_months, build_month_grid, first_day_of_month, DAYS_PER_WEEK};
use crate::services::labels::CalendarLabels;
use crate::services::layout::{LayoutMetrics, PickerSize};
use crate::utils::date::with_time_of;

/// Month navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Back,
}

impl Direction {
    pub fn delta(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Back => -1,
        }
    }
}

pub struct DatePicker {
    date_value: NaiveDateTime,
    displayed_month: CalendarDate,
    week_start: Weekday,
    marks: MarkSet,
    cells: Vec<DayCell>,
    metrics: LayoutMetrics,
    reported_height: f32,
    clock: Box<dyn Clock>,
    listener: Option<Box<dyn DatePickerListener>>,
}

impl DatePicker {
    /// Create a picker showing the month of `initial`
    ///
    /// # Arguments
    /// * `initial` - Selected timestamp; its month becomes the displayed month
    /// * `week_start_day` - Weekday in column 0, 1 = Sunday ..= 7 = Saturday
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use month_date_picker::services::picker::DatePicker;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(9, 0, 0).unwrap();
    /// let picker = DatePicker::new(start, 2).unwrap();
    /// assert_eq!(picker.displayed_year_month(), (2024, 3));
    /// assert!(DatePicker::new(start, 8).is_err());
    /// ```
    pub fn new(initial: NaiveDateTime, week_start_day: u8) -> Result<Self, PickerError> {
        Self::with_clock(initial, week_start_day, SystemClock)
    }

    /// Same as [`DatePicker::new`] with an explicit "now" source
    pub fn with_clock(
        initial: NaiveDateTime,
        week_start_day: u8,
        clock: impl Clock + 'static,
    ) -> Result<Self, PickerError> {
        let week_start = weekday_from_number(week_start_day)?;
        let displayed_month = first_day_of_month(CalendarDate::from_datetime(initial));

        let mut picker = Self {
            date_value: initial,
            displayed_month,
            week_start,
            marks: MarkSet::new(),
            cells: Vec::new(),
            metrics: LayoutMetrics::default(),
            reported_height: 0.0,
            clock: Box::new(clock),
            listener: None,
        };
        picker.cells = picker.decorated_grid(displayed_month, CalendarDate::from_datetime(initial))?;
        picker.reported_height = picker.preferred_size().height;

        debug!(
            "Date picker created at {} (week starts {:?})",
            initial, week_start
        );
        Ok(picker)
    }

    /// Create a picker from stored settings.
    ///
    /// A missing `initial_date` selects the clock's current time. Layout
    /// settings that fail validation are rejected.
    pub fn from_settings(
        settings: &PickerSettings,
        clock: impl Clock + 'static,
    ) -> Result<Self, PickerError> {
        settings.layout.validate().map_err(PickerError::InvalidLayout)?;
        let initial = settings
            .initial_date
            .map(|date| CalendarDate::from(date).noon())
            .unwrap_or_else(|| clock.now());
        let mut picker = Self::with_clock(initial, settings.week_start_day, clock)?;
        picker.metrics = LayoutMetrics::from(&settings.layout);
        picker.reported_height = picker.preferred_size().height;
        Ok(picker)
    }

    // ----- listeners -----

    pub fn set_listener(&mut self, listener: impl DatePickerListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    // ----- accessors -----

    /// The authoritative selected timestamp
    pub fn date_value(&self) -> NaiveDateTime {
        self.date_value
    }

    pub fn selected_date(&self) -> CalendarDate {
        CalendarDate::from_datetime(self.date_value)
    }

    /// Day 1 of the displayed month
    pub fn displayed_month(&self) -> CalendarDate {
        self.displayed_month
    }

    pub fn displayed_year_month(&self) -> (i32, u32) {
        (self.displayed_month.year(), self.displayed_month.month())
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Current grid, left to right and top to bottom
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn rows(&self) -> usize {
        self.cells.len() / DAYS_PER_WEEK
    }

    pub fn marks(&self) -> &MarkSet {
        &self.marks
    }

    pub fn marked_dates(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.marks.dates()
    }

    pub fn is_marked(&self, date: impl Into<CalendarDate>) -> bool {
        self.marks.contains(&date.into())
    }

    pub fn metrics(&self) -> LayoutMetrics {
        self.metrics
    }

    pub fn preferred_size(&self) -> PickerSize {
        self.metrics.preferred_size(self.rows())
    }

    /// Title for the displayed month, e.g. "March 2024"
    pub fn month_title(&self, labels: &dyn CalendarLabels) -> String {
        let (year, month) = self.displayed_year_month();
        labels.month_title(year, month)
    }

    // ----- navigation and selection -----

    /// Page one month forward or back. The selection is left alone.
    pub fn navigate_month(&mut self, direction: Direction) -> Result<(), PickerError> {
        let cursor = add_months(self.displayed_month, direction.delta())?;
        self.cells = self.decorated_grid(cursor, self.selected_date())?;
        self.displayed_month = cursor;

        debug!("Navigated to {}-{:02}", cursor.year(), cursor.month());
        self.report_size();
        Ok(())
    }

    /// Select a day as a user click would.
    ///
    /// The day comes from `candidate`, the time of day from the current
    /// selection. A day outside the displayed month pages the grid to that
    /// day's month.
    pub fn select_date(&mut self, candidate: impl Into<CalendarDate>) -> Result<(), PickerError> {
        let candidate = candidate.into();
        let cursor = match self.provenance_of(candidate) {
            Provenance::CurrentMonth => self.displayed_month,
            Provenance::PreviousMonth | Provenance::NextMonth => first_day_of_month(candidate),
        };
        let date_value = with_time_of(candidate, self.date_value);

        self.cells = self.decorated_grid(cursor, candidate)?;
        self.displayed_month = cursor;
        self.date_value = date_value;

        debug!("Selected {}", date_value);
        self.report_size();
        self.notify_date_selected();
        Ok(())
    }

    /// Select the cell at `index` of the current grid
    pub fn select_cell(&mut self, index: usize) -> Result<(), PickerError> {
        let date = self
            .cells
            .get(index)
            .map(|cell| cell.date)
            .ok_or(PickerError::CellOutOfRange {
                index,
                len: self.cells.len(),
            })?;
        self.select_date(date)
    }

    /// Show and select `date` exactly, time of day included
    pub fn jump_to_date(&mut self, date: impl Into<NaiveDateTime>) -> Result<(), PickerError> {
        let date_value = date.into();
        let selected = CalendarDate::from_datetime(date_value);
        let cursor = first_day_of_month(selected);

        self.cells = self.decorated_grid(cursor, selected)?;
        self.displayed_month = cursor;
        self.date_value = date_value;

        debug!("Jumped to {}", date_value);
        self.report_size();
        self.notify_date_selected();
        Ok(())
    }

    /// Jump to the clock's current time
    pub fn jump_to_today(&mut self) -> Result<(), PickerError> {
        let now = self.clock.now();
        self.jump_to_date(now)
    }

    // ----- marks -----

    /// Mark a day with the default mark colour
    pub fn mark_date(&mut self, date: impl Into<CalendarDate>) {
        self.mark(date.into(), None);
    }

    /// Mark a day with its own colour
    pub fn mark_date_with_color(&mut self, date: impl Into<CalendarDate>, color: MarkColor) {
        self.mark(date.into(), Some(color));
    }

    fn mark(&mut self, date: CalendarDate, color: Option<MarkColor>) {
        if self.marks.insert(date, color) {
            debug!("Marked {}", date);
        }
        self.refresh_flags();
    }

    pub fn unmark_date(&mut self, date: impl Into<CalendarDate>) {
        let date = date.into();
        if self.marks.remove(&date) {
            debug!("Unmarked {}", date);
        }
        self.refresh_flags();
    }

    pub fn unmark_all(&mut self) {
        if self.marks.clear() {
            debug!("Cleared all marks");
        }
        self.refresh_flags();
    }

    // ----- view feedback -----

    /// Pointer entered (`true`) or left (`false`) the cell showing `date`.
    ///
    /// Returns false when no cell shows that day. Highlights do not survive
    /// the next rebuild.
    pub fn set_highlighted(&mut self, date: impl Into<CalendarDate>, flag: bool) -> bool {
        let date = date.into();
        let mut found = false;
        for cell in self.cells.iter_mut().filter(|cell| cell.date == date) {
            cell.is_highlighted = flag;
            found = true;
        }
        found
    }

    /// Host changed width or font metrics
    pub fn set_metrics(&mut self, metrics: LayoutMetrics) {
        self.metrics = metrics;
        self.report_size();
    }

    // ----- internals -----

    fn provenance_of(&self, date: CalendarDate) -> Provenance {
        if date.same_month(&self.displayed_month) {
            Provenance::CurrentMonth
        } else if date < self.displayed_month {
            Provenance::PreviousMonth
        } else {
            Provenance::NextMonth
        }
    }

    fn decorated_grid(
        &self,
        cursor: CalendarDate,
        selected: CalendarDate,
    ) -> Result<Vec<DayCell>, PickerError> {
        let mut cells = build_month_grid(cursor, self.week_start)?;
        apply_flags(&mut cells, selected, self.clock.today(), &self.marks);
        Ok(cells)
    }

    fn refresh_flags(&mut self) {
        let selected = self.selected_date();
        let today = self.clock.today();
        apply_flags(&mut self.cells, selected, today, &self.marks);
    }

    fn report_size(&mut self) {
        let size = self.preferred_size();
        if size.height != self.reported_height {
            self.reported_height = size.height;
            debug!("Preferred size changed to {}x{}", size.width, size.height);
            if let Some(listener) = self.listener.as_mut() {
                listener.preferred_size_changed(size);
            }
        }
    }

    fn notify_date_selected(&mut self) {
        let date_value = self.date_value;
        if let Some(listener) = self.listener.as_mut() {
            listener.date_selected(date_value);
        }
    }
}

fn apply_flags(cells: &mut [DayCell], selected: CalendarDate, today: CalendarDate, marks: &MarkSet) {
    for cell in cells.iter_mut() {
        cell.is_selected = cell.date == selected;
        cell.is_today = cell.date == today;
        cell.is_marked = marks.contains(&cell.date);
        cell.mark_color = marks.color_of(&cell.date);
        cell.is_highlighted = false;
    }
}
