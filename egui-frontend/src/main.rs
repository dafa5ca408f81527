use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::app_state::BoardingTrackerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Boarding Tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Boarding Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Boarding Tracker",
        options,
        Box::new(|_cc| match BoardingTrackerApp::new() {
            Ok(app) => {
                info!("Successfully initialized Boarding Tracker app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
