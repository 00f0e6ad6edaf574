use config::Config;
use image_classifier::engine::InferenceEngine;
use logger::impl_console::LoggerConsole;

mod config;
mod image_classifier;
mod logger;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();

    let logger = Box::new(LoggerConsole::new(config.logger_timezone));

    let image_path = std::env::args()
        .nth(1)
        .ok_or("usage: sleep-detector <image-path>")?;

    let engine = InferenceEngine::load(&config.model_path, &config.labels_path, logger)?;

    let classification = engine.classify(&image_path)?;

    println!(
        "{} ({:.1}% confidence)",
        classification.label,
        classification.confidence * 100.0
    );

    Ok(())
}
