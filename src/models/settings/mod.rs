// Settings module
// Picker configuration recognised at construction time

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::PickerError;
use crate::models::calendar_date::weekday_from_number;
use crate::models::mark::MarkColor;

/// Top-level picker configuration, stored as TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerSettings {
    /// Weekday occupying column 0: 1 = Sunday ..= 7 = Saturday
    pub week_start_day: u8,
    /// Date establishing both the selection and the displayed month.
    /// `None` means "today" at construction.
    pub initial_date: Option<NaiveDate>,
    pub layout: LayoutSettings,
    pub appearance: Appearance,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            week_start_day: 2, // Monday
            initial_date: None,
            layout: LayoutSettings::default(),
            appearance: Appearance::default(),
        }
    }
}

impl PickerSettings {
    /// Validate every field
    pub fn validate(&self) -> Result<(), String> {
        self.week_start().map_err(|e| e.to_string())?;
        self.layout.validate()?;
        self.appearance.validate()?;
        Ok(())
    }

    /// The configured week start as a chrono weekday
    pub fn week_start(&self) -> Result<Weekday, PickerError> {
        weekday_from_number(self.week_start_day)
    }
}

/// Geometry inputs for the grid layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Total widget width; each day cell is floor(width / 7) square
    pub width: f32,
    /// Height of one text line (weekday header row)
    pub line_height: f32,
    /// Space reserved above the weekday row for the title and buttons
    pub header_height: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            width: 280.0,
            line_height: 16.0,
            header_height: 50.0,
        }
    }
}

impl LayoutSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.width.is_finite() && self.width >= 7.0) {
            return Err(format!("Layout width must be at least 7, got {}", self.width));
        }
        if !(self.line_height.is_finite() && self.line_height > 0.0) {
            return Err(format!("Line height must be positive, got {}", self.line_height));
        }
        if !(self.header_height.is_finite() && self.header_height >= 0.0) {
            return Err(format!(
                "Header height cannot be negative, got {}",
                self.header_height
            ));
        }
        Ok(())
    }
}

/// Keyword that switches off painting of one appearance part
pub const NO_COLOR: &str = "none";

/// Colour overrides of the widget as `#RRGGBB` strings.
///
/// An unset entry falls back to the built-in [`Palette`]; the keyword
/// `"none"` leaves that part unpainted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub background: Option<String>,
    pub text: Option<String>,
    pub selected_text: Option<String>,
    pub today_text: Option<String>,
    pub selected_background: Option<String>,
    pub selected_border: Option<String>,
    pub highlighted_background: Option<String>,
    pub highlighted_border: Option<String>,
    pub today_background: Option<String>,
    pub today_border: Option<String>,
    /// Default colour of the mark dot
    pub mark: Option<String>,
}

/// Resolved widget colours; `None` parts are not painted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Option<MarkColor>,
    pub text: Option<MarkColor>,
    pub selected_text: Option<MarkColor>,
    pub today_text: Option<MarkColor>,
    pub selected_background: Option<MarkColor>,
    pub selected_border: Option<MarkColor>,
    pub highlighted_background: Option<MarkColor>,
    pub highlighted_border: Option<MarkColor>,
    pub today_background: Option<MarkColor>,
    pub today_border: Option<MarkColor>,
    pub mark: Option<MarkColor>,
}

impl Default for Palette {
    fn default() -> Self {
        let white = Some(MarkColor::rgb(0xFF, 0xFF, 0xFF));
        let blue = Some(MarkColor::rgb(0x00, 0x00, 0xFF));
        Self {
            background: white,
            text: Some(MarkColor::rgb(0x00, 0x00, 0x00)),
            selected_text: white,
            today_text: blue,
            selected_background: Some(MarkColor::rgb(0xFF, 0x80, 0x00)),
            selected_border: blue,
            highlighted_background: Some(MarkColor::rgb(0xAA, 0xAA, 0xAA)),
            highlighted_border: Some(MarkColor::rgb(0x55, 0x55, 0x55)),
            today_background: white,
            today_border: blue,
            mark: Some(MarkColor::rgb(0xFF, 0x00, 0x00)),
        }
    }
}

/// Parse one entry; `Ok(None)` stands for the "none" keyword
fn parse_entry(hex: &str) -> Result<Option<MarkColor>, PickerError> {
    if hex.trim().eq_ignore_ascii_case(NO_COLOR) {
        Ok(None)
    } else {
        MarkColor::from_hex(hex).map(Some)
    }
}

fn overlay(value: &Option<String>, fallback: Option<MarkColor>) -> Option<MarkColor> {
    match value {
        Some(hex) => parse_entry(hex).unwrap_or(fallback),
        None => fallback,
    }
}

impl Appearance {
    fn entries(&self) -> [(&'static str, &Option<String>); 11] {
        [
            ("background", &self.background),
            ("text", &self.text),
            ("selected_text", &self.selected_text),
            ("today_text", &self.today_text),
            ("selected_background", &self.selected_background),
            ("selected_border", &self.selected_border),
            ("highlighted_background", &self.highlighted_background),
            ("highlighted_border", &self.highlighted_border),
            ("today_background", &self.today_background),
            ("today_border", &self.today_border),
            ("mark", &self.mark),
        ]
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in self.entries() {
            if let Some(hex) = value {
                parse_entry(hex).map_err(|e| format!("{}: {}", name, e))?;
            }
        }
        Ok(())
    }

    /// Apply these overrides on top of the built-in palette
    pub fn palette(&self) -> Palette {
        let base = Palette::default();
        Palette {
            background: overlay(&self.background, base.background),
            text: overlay(&self.text, base.text),
            selected_text: overlay(&self.selected_text, base.selected_text),
            today_text: overlay(&self.today_text, base.today_text),
            selected_background: overlay(&self.selected_background, base.selected_background),
            selected_border: overlay(&self.selected_border, base.selected_border),
            highlighted_background: overlay(
                &self.highlighted_background,
                base.highlighted_background,
            ),
            highlighted_border: overlay(&self.highlighted_border, base.highlighted_border),
            today_background: overlay(&self.today_background, base.today_background),
            today_border: overlay(&self.today_border, base.today_border),
            mark: overlay(&self.mark, base.mark),
        }
    }
}
