mod app;
pub mod date_picker;
pub mod theme;

pub use app::PickerDemoApp;
pub use date_picker::DatePickerWidget;
pub use theme::PickerTheme;
