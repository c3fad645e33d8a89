//! Grid geometry.
//!
//! Turns a grid of day cells into frames in a flipped (top-left origin)
//! coordinate space: title and navigation buttons on top, one row of weekday
//! labels, then square day cells seven per row. Renderers place widgets on
//! these frames; the controller uses the total height to tell the host when
//! the natural size changes between 4/5/6 row months.

use crate::models::day_cell::DayCell;
use crate::models::settings::LayoutSettings;
use crate::services::grid::DAYS_PER_WEEK;

const NAV_BUTTON_WIDTH: f32 = 38.0;
const NAV_BUTTON_HEIGHT: f32 = 39.0;
const TITLE_MARGIN: f32 = 40.0;
const TITLE_TOP: f32 = 10.0;
const TITLE_HEIGHT: f32 = 30.0;

/// Axis-aligned rectangle, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.max_x() && y >= self.y && y < self.max_y()
    }
}

/// Natural size of the widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerSize {
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub width: f32,
    pub line_height: f32,
    pub header_height: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self::from(&LayoutSettings::default())
    }
}

impl From<&LayoutSettings> for LayoutMetrics {
    fn from(settings: &LayoutSettings) -> Self {
        Self {
            width: settings.width,
            line_height: settings.line_height,
            header_height: settings.header_height,
        }
    }
}

impl LayoutMetrics {
    /// Side of one square day cell: floor(width / 7)
    pub fn cell_size(&self) -> f32 {
        (self.width / DAYS_PER_WEEK as f32).floor()
    }

    pub fn title_frame(&self) -> Frame {
        Frame::new(
            TITLE_MARGIN,
            TITLE_TOP,
            (self.width - 2.0 * TITLE_MARGIN).max(0.0),
            TITLE_HEIGHT,
        )
    }

    pub fn back_button_frame(&self) -> Frame {
        Frame::new(0.0, 0.0, NAV_BUTTON_WIDTH, NAV_BUTTON_HEIGHT)
    }

    pub fn forward_button_frame(&self) -> Frame {
        Frame::new(
            self.width - NAV_BUTTON_WIDTH,
            0.0,
            NAV_BUTTON_WIDTH,
            NAV_BUTTON_HEIGHT,
        )
    }

    /// Frames of the seven weekday labels, in column order
    pub fn weekday_label_frames(&self) -> [Frame; DAYS_PER_WEEK] {
        let width = self.cell_size();
        std::array::from_fn(|column| {
            Frame::new(column as f32 * width, self.header_height, width, self.line_height)
        })
    }

    fn grid_top(&self) -> f32 {
        self.header_height + self.line_height
    }

    /// Frame of the cell at `row`/`column`
    pub fn cell_frame(&self, row: usize, column: usize) -> Frame {
        let size = self.cell_size();
        Frame::new(
            column as f32 * size,
            self.grid_top() + row as f32 * size,
            size,
            size,
        )
    }

    /// Area covered by `rows` rows of day cells
    pub fn grid_frame(&self, rows: usize) -> Frame {
        let size = self.cell_size();
        Frame::new(
            0.0,
            self.grid_top(),
            size * DAYS_PER_WEEK as f32,
            size * rows as f32,
        )
    }

    /// Frames for every cell of `cells`, in grid order
    pub fn cell_frames(&self, cells: &[DayCell]) -> Vec<Frame> {
        cells
            .iter()
            .map(|cell| self.cell_frame(cell.row, cell.column))
            .collect()
    }

    /// Index of the cell under a point, if any
    pub fn hit_test(&self, cells: &[DayCell], x: f32, y: f32) -> Option<usize> {
        cells
            .iter()
            .position(|cell| self.cell_frame(cell.row, cell.column).contains(x, y))
    }

    /// Natural widget size for a grid with `rows` rows
    pub fn preferred_size(&self, rows: usize) -> PickerSize {
        PickerSize {
            width: self.width,
            height: self.grid_top() + rows as f32 * self.cell_size(),
        }
    }
}
