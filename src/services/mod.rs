// Service module exports

pub mod grid;
pub mod labels;
pub mod layout;
pub mod picker;
pub mod settings;
