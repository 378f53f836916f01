// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Scratchview — desktop dashboard for NY scratch-off ticket statistics.
//!
//! Presentational only: every number on screen was precomputed by the remote
//! service. This binary fetches a fixed set of JSON resources and renders
//! them.

mod api;
mod app;
mod config;
mod format;
mod loader;
mod movers;
mod state;
mod ui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = config::ApiConfig::from_env();
    log::info!("Scratchview starting (API base URL: {})", config.base_url);
    let client = api::ApiClient::new(&config)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Scratchview")
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "scratchview",
        options,
        Box::new(move |cc| Ok(Box::new(app::ScratchviewApp::new(cc, client)))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run the UI event loop: {e}"))
}
