//! Colour palette for the date picker widget.
//!
//! Converts the [`Palette`] resolved from [`Appearance`] into
//! `egui::Color32` and resolves the paint style of a single day cell.

use egui::Color32;

use crate::models::day_cell::{CellVisual, DayCell};
use crate::models::mark::MarkColor;
use crate::models::settings::{Appearance, Palette};

/// Factor applied to text of days borrowed from neighbouring months
const PADDING_TEXT_FADE: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerTheme {
    pub background: Option<Color32>,
    pub text: Color32,
    pub selected_text: Color32,
    pub today_text: Color32,
    pub selected_background: Option<Color32>,
    pub selected_border: Option<Color32>,
    pub highlighted_background: Option<Color32>,
    pub highlighted_border: Option<Color32>,
    pub today_background: Option<Color32>,
    pub today_border: Option<Color32>,
    pub mark: Color32,
}

/// How one cell is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStyle {
    pub fill: Option<Color32>,
    pub stroke: Option<Color32>,
    pub text: Color32,
    /// Colour of the mark dot, `None` when the day is not marked
    pub mark: Option<Color32>,
}

impl Default for PickerTheme {
    fn default() -> Self {
        Self::from_appearance(&Appearance::default())
    }
}

impl PickerTheme {
    pub fn from_appearance(appearance: &Appearance) -> Self {
        Self::from_palette(&appearance.palette())
    }

    /// Unpainted text parts become transparent; an unpainted mark keeps red
    pub fn from_palette(palette: &Palette) -> Self {
        let color = |c: Option<MarkColor>| c.map(mark_color32);
        let text = |c: Option<MarkColor>| color(c).unwrap_or(Color32::TRANSPARENT);

        Self {
            background: color(palette.background),
            text: text(palette.text),
            selected_text: text(palette.selected_text),
            today_text: text(palette.today_text),
            selected_background: color(palette.selected_background),
            selected_border: color(palette.selected_border),
            highlighted_background: color(palette.highlighted_background),
            highlighted_border: color(palette.highlighted_border),
            today_background: color(palette.today_background),
            today_border: color(palette.today_border),
            mark: color(palette.mark).unwrap_or(Color32::RED),
        }
    }

    /// Resolve fill, border and text colours; selected > highlighted > today
    pub fn cell_style(&self, cell: &DayCell) -> CellStyle {
        let (fill, stroke, text) = match cell.visual() {
            CellVisual::Selected => (
                self.selected_background,
                self.selected_border,
                self.selected_text,
            ),
            CellVisual::Highlighted => {
                (self.highlighted_background, self.highlighted_border, self.text)
            }
            CellVisual::Today => (self.today_background, self.today_border, self.today_text),
            CellVisual::Plain => (None, None, self.text),
        };

        let text = if cell.is_padding() && cell.visual() != CellVisual::Selected {
            text.gamma_multiply(PADDING_TEXT_FADE)
        } else {
            text
        };

        let mark = cell
            .is_marked
            .then(|| cell.mark_color.map(mark_color32).unwrap_or(self.mark));

        CellStyle {
            fill,
            stroke,
            text,
            mark,
        }
    }
}

pub fn mark_color32(color: MarkColor) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}
