// Module exports for models

pub mod calendar_date;
pub mod day_cell;
pub mod mark;
pub mod settings;
