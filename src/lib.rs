// Month Date Picker Library
// Grid engine, picker state controller and egui widget

pub mod error;
pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
