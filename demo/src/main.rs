use eframe::egui;
use log::{error, info};

mod app;

use app::SunriseSunsetDemoApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting sunrise/sunset widget demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_min_inner_size([360.0, 320.0])
            .with_title("Sunrise Sunset Demo")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Sunrise Sunset Demo",
        options,
        Box::new(|_cc| match SunriseSunsetDemoApp::new() {
            Ok(app) => Ok(Box::new(app)),
            Err(e) => {
                error!("Failed to initialize demo app: {}", e);
                Err(format!("Failed to initialize demo app: {}", e).into())
            }
        }),
    )
}
