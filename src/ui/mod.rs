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

//! Render functions for the three lifecycle views.
//!
//! Pure presentation: these functions only read the state they are given and
//! report back whether the user asked for a reload.

mod cards;
mod table;

use crate::state::Dashboard;

/// Spinner view while the batch is in flight.
pub fn loading_view(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.spinner();
        ui.add_space(8.0);
        ui.label("Fetching the latest ticket statistics…");
    });
}

/// Error view with the generic message and a Reload button.
///
/// Returns `true` when the user clicked Reload.
pub fn error_view(ui: &mut egui::Ui, message: &str) -> bool {
    let mut reload = false;
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.heading("Data unavailable");
        ui.add_space(4.0);
        ui.label(message);
        ui.add_space(12.0);
        if ui.button("Reload").clicked() {
            reload = true;
        }
    });
    reload
}

/// The full dashboard: summary cards on top, ranking tables below.
///
/// Returns `true` when the user clicked Reload.
pub fn dashboard_view(ui: &mut egui::Ui, dashboard: &Dashboard) -> bool {
    let mut reload = false;

    ui.horizontal(|ui| {
        ui.heading("NY Scratch-Off Dashboard");
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Reload").clicked() {
                reload = true;
            }
            if let Some(last_updated) = &dashboard.last_updated {
                ui.weak(format!("Updated {last_updated}"));
            }
        });
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        cards::recommendation_card(ui, &dashboard.recommendation);
        if let Some(movers) = &dashboard.movers {
            ui.add_space(8.0);
            cards::movers_card(ui, movers);
        }

        ui.add_space(12.0);
        table::ticket_table(
            ui,
            "Top games by remaining prizes",
            "best_any_table",
            &dashboard.best_any,
        );
        ui.add_space(12.0);
        table::ticket_table(
            ui,
            "Top games by grand prizes remaining",
            "best_grand_table",
            &dashboard.best_grand,
        );

        ui.add_space(12.0);
        ui.horizontal(|ui| {
            ui.hyperlink_to(
                "Data source: New York Open Data",
                "https://data.ny.gov/resource/nzqa-7unk.json",
            );
            ui.weak(format!("{} snapshots tracked", dashboard.history.len()));
        });
    });

    reload
}
