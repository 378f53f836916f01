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

//! The eframe application: activation lifecycle and frame loop.
//!
//! Each activation (launch or Reload) resets the view to Loading, bumps a
//! generation counter, and spawns one worker thread that runs the whole fetch
//! batch and reports back over a channel. Results from superseded activations
//! are discarded, which keeps the leave-Loading-exactly-once property even
//! when a stale batch lands late.

use std::sync::mpsc;
use std::thread;

use crate::api::ApiClient;
use crate::loader::{self, LoadError};
use crate::state::{Dashboard, LoadState};
use crate::ui;

/// One settled batch, tagged with the activation that started it.
struct BatchResult {
    generation: u64,
    outcome: Result<Dashboard, LoadError>,
}

/// Top-level application state.
pub struct ScratchviewApp {
    api: ApiClient,
    state: LoadState,
    /// Bumped on every activation; results from older generations are stale.
    generation: u64,
    sender: mpsc::Sender<BatchResult>,
    results: mpsc::Receiver<BatchResult>,
    ctx: egui::Context,
}

impl ScratchviewApp {
    /// Creates the app and starts the first activation immediately.
    pub fn new(cc: &eframe::CreationContext<'_>, api: ApiClient) -> Self {
        let (sender, results) = mpsc::channel();
        let mut app = Self {
            api,
            state: LoadState::default(),
            generation: 0,
            sender,
            results,
            ctx: cc.egui_ctx.clone(),
        };
        app.activate();
        app
    }

    /// Starts a fresh activation: resets the lifecycle to Loading and spawns
    /// the fetch batch on a worker thread.
    fn activate(&mut self) {
        self.generation += 1;
        self.state = LoadState::Loading;

        let generation = self.generation;
        let api = self.api.clone();
        let sender = self.sender.clone();
        let ctx = self.ctx.clone();

        log::info!("Activation {generation}: fetching dashboard data");
        thread::spawn(move || {
            let outcome = loader::load_dashboard(&api);
            if let Err(error) = &outcome {
                let failed: Vec<&str> =
                    error.failures().iter().map(|f| f.endpoint()).collect();
                log::warn!("Activation {generation} failed; endpoints: {failed:?}");
            }
            if sender.send(BatchResult { generation, outcome }).is_err() {
                log::debug!("Batch result dropped: the view is gone");
            }
            ctx.request_repaint();
        });
    }

    /// Drains settled batches, applying the one matching the current
    /// activation and discarding the rest.
    fn poll_results(&mut self) {
        while let Ok(result) = self.results.try_recv() {
            if result.generation != self.generation {
                log::debug!(
                    "Discarding batch result from superseded activation {}",
                    result.generation
                );
                continue;
            }
            let outcome = result.outcome.map_err(|error| error.user_message());
            if !self.state.settle(outcome) {
                log::warn!(
                    "Batch result for activation {} arrived after the state settled",
                    result.generation
                );
            }
        }
    }
}

impl eframe::App for ScratchviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        let mut reload = false;
        egui::CentralPanel::default().show(ctx, |ui| match &self.state {
            LoadState::Loading => ui::loading_view(ui),
            LoadState::Error(message) => reload = ui::error_view(ui, message),
            LoadState::Ready(dashboard) => reload = ui::dashboard_view(ui, dashboard),
        });
        if reload {
            self.activate();
        }
    }
}
