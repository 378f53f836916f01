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

//! Summary cards: the recommended game and the expected-value movers.

use egui::RichText;

use crate::api::Recommendation;
use crate::format;
use crate::movers::{Mover, Movers};

/// The service's recommended game, with its headline statistics.
pub fn recommendation_card(ui: &mut egui::Ui, recommendation: &Recommendation) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("Today's pick").small().weak());
        ui.heading(&recommendation.game.name);
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            stat(
                ui,
                "Expected value",
                &format::usd(recommendation.game.expected_value),
            );
            stat(
                ui,
                "Prizes remaining",
                &format::percent(recommendation.game.remaining_ratio),
            );
            stat(
                ui,
                "Grand prizes left",
                &format::count(recommendation.game.grand_prizes_remaining),
            );
            if let Some(score) = recommendation.smart_score {
                stat(ui, "Smart score", &format!("{score:.3}"));
            }
        });
    });
}

/// Gainers and losers since the previous snapshot, side by side.
pub fn movers_card(ui: &mut egui::Ui, movers: &Movers) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("Since the last snapshot").small().weak());
        ui.columns(2, |columns| {
            mover_list(&mut columns[0], "Gainers", &movers.gainers);
            mover_list(&mut columns[1], "Losers", &movers.losers);
        });
    });
}

fn mover_list(ui: &mut egui::Ui, title: &str, movers: &[Mover]) {
    ui.label(RichText::new(title).strong());
    for mover in movers {
        ui.horizontal(|ui| {
            ui.label(&mover.name).on_hover_text(format!(
                "was {}, now {}",
                format::usd(mover.expected_value_prev),
                format::usd(mover.expected_value_now)
            ));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.monospace(format::signed_usd(mover.change));
            });
        });
    }
}

fn stat(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.vertical(|ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).strong());
    });
}
