// Date Picker Engine demo
// Main entry point

use date_picker_engine::services::settings::SettingsService;
use date_picker_engine::ui_egui::PickerDemoApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting date picker demo");

    let settings_service = SettingsService::with_default_path();
    let settings = match &settings_service {
        Some(service) => service.load_or_default(),
        None => {
            log::warn!("No config directory available; settings will not persist");
            Default::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 480.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Date Picker",
        options,
        Box::new(move |cc| Ok(Box::new(PickerDemoApp::new(cc, settings, settings_service)))),
    )
}
