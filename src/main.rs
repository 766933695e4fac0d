// src/main.rs
use anyhow::Result;
use eframe::egui;

mod app;
mod data;
mod state;
mod ui;

use app::StoryApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("Superstore Profit Story"),
        ..Default::default()
    };

    eframe::run_native(
        "Superstore Profit Story",
        options,
        Box::new(|_cc| Box::new(StoryApp::new())),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
