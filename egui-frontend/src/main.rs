use eframe::egui;
use log::{error, info};

mod app;
mod backend;
mod ui;

use app::MoodTrackerApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Mood Tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0]) // Enough room for the picker + chart
            .with_min_inner_size([400.0, 480.0])
            .with_title("Mood Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Mood Tracker",
        options,
        Box::new(|cc| {
            // Window state persistence is handled by eframe itself
            if let Some(_storage) = cc.storage {
                info!("Persistence storage available");
            }

            match MoodTrackerApp::new() {
                Ok(app) => {
                    info!("Successfully initialized Mood Tracker app");
                    Ok(Box::new(app))
                }
                Err(e) => {
                    error!("Failed to initialize app: {}", e);
                    Err(format!("Failed to initialize app: {}", e).into())
                }
            }
        }),
    )
}
