// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scrap Journal
//!
//! A desktop notebook that opens with a shake-and-fade animation and
//! reveals a journal page onto which image scraps can be dropped, dragged
//! and resized.

mod app;
mod config;
mod input;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::JournalApp;
use config::Settings;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let settings = Settings::default();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size(settings.min_window_size)
            .with_title("Scrap Journal"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Scrap Journal",
        options,
        Box::new(move |_cc| Ok(Box::new(JournalApp::new(&settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
