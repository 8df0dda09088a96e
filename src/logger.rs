/// Logging initialization.
/// Logs to logs/emochat.log, falling back to stderr when the file
/// cannot be opened.

use std::io::Write;
use log::LevelFilter;

pub fn init() {
    let mut builder = env_logger::Builder::new();

    // Honor RUST_LOG when it is set.
    if let Ok(log_level) = std::env::var("RUST_LOG") {
        builder.parse_filters(&log_level);
    } else {
        // Default: INFO, with the noisy UI dependencies quieted down.
        builder.filter_level(LevelFilter::Info);
        builder.filter_module("eframe", LevelFilter::Warn);
        builder.filter_module("egui", LevelFilter::Warn);
        builder.filter_module("wgpu", LevelFilter::Warn);
    }

    // Log format: [HH:MM:SS LEVEL] module - message
    builder.format(|buf, record| {
        let now = chrono::Local::now().format("%H:%M:%S");
        writeln!(
            buf,
            "[{} {}] {} - {}",
            now,
            record.level(),
            record.target(),
            record.args()
        )
    });

    let log_file = std::fs::create_dir_all("logs").and_then(|_| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("logs/emochat.log")
    });

    match log_file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Could not open log file, logging to stderr: {}", e);
        }
    }

    builder.init();
    log::info!("Logging initialized ✓");
}
