// Month Date Picker demo
// Main entry point

use month_date_picker::models::settings::PickerSettings;
use month_date_picker::services::settings::SettingsService;
use month_date_picker::ui_egui::PickerDemoApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Date Picker demo");

    let settings = match SettingsService::from_default_location() {
        Ok(service) => service.load_or_default(),
        Err(e) => {
            log::warn!("{:#}; using default settings", e);
            PickerSettings::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Month Date Picker")
            .with_inner_size(PickerDemoApp::window_size(&settings)),
        ..Default::default()
    };

    eframe::run_native(
        "Month Date Picker",
        options,
        Box::new(move |cc| {
            let app = PickerDemoApp::new(cc, &settings)?;
            Ok(Box::new(app))
        }),
    )
}
