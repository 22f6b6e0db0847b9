// src/main.rs
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui;

mod analysis;
mod api;
mod app;
mod config;
mod state;
mod ui;
mod utils;

use crate::api::{HttpTenderApi, TenderApi};
use crate::app::TenderApp;
use crate::config::Settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::load()?;
    log::info!("Using analysis service at {}", settings.analyze_url());

    let api: Arc<dyn TenderApi> =
        Arc::new(HttpTenderApi::new(&settings).context("Failed to create API client")?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_width, settings.window_height])
            .with_title("Toptimize"),
        ..Default::default()
    };

    eframe::run_native(
        "Toptimize",
        options,
        Box::new(move |cc| Box::new(TenderApp::new(cc, settings, api))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
