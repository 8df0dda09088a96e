// Application modules
mod agent;
mod classifier;
mod config;
mod error;
mod logger;
mod responses;
mod ui;

use config::Config;
use eframe::NativeOptions;
use ui::ChatApp;

fn main() -> Result<(), eframe::Error> {
    logger::init();
    log::info!("🚀 Emotion chatbot starting");

    let config = Config::default();
    log::info!(
        "📁 Configuration loaded, model artifact: {}",
        config.model_path.display()
    );
    let app_title = config.app_title.clone();

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([360.0, 420.0])
            .with_title(&app_title),
        ..Default::default()
    };

    eframe::run_native(
        &app_title,
        options,
        Box::new(move |_cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
            Ok(Box::new(ChatApp::new(config)))
        }),
    )
}
