use eframe::egui;
use log::{error, info};

mod backend;
mod ui;

use ui::SubscriptionCalendarApp;

fn main() -> Result<(), eframe::Error> {
    // RUST_LOG controls the level
    env_logger::init();
    info!("Starting Subscription Calendar egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 560.0])
            .with_title("Subscription Calendar")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Subscription Calendar",
        options,
        Box::new(|cc| match SubscriptionCalendarApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Subscription Calendar app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {:#}", e);
                // Convert anyhow::Error to eframe::Error
                Err(format!("Failed to initialize app: {:#}", e).into())
            }
        }),
    )
}
