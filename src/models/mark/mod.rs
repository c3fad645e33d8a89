// Mark module
// Optional per-date colour for the mark overlay

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PickerError;

/// RGB colour of a single mark dot.
///
/// Kept free of any GUI type so the core stays toolkit independent; the egui
/// adapter converts it to `Color32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl MarkColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex colour string (`#RRGGBB` or `#RGB`, leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self, PickerError> {
        parse_hex(hex).ok_or_else(|| PickerError::InvalidColor(hex.to_string()))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for MarkColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

fn parse_hex(hex: &str) -> Option<MarkColor> {
    let hex = hex.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(MarkColor::rgb(r, g, b))
    } else if hex.len() == 3 {
        let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
        let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
        let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
        Some(MarkColor::rgb(r, g, b))
    } else {
        None
    }
}
