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

//! The ranking table shared by the best-any and best-grand views.

use egui::RichText;

use crate::api::TicketSummary;
use crate::format;

/// Renders one ranking of games as a striped grid.
pub fn ticket_table(ui: &mut egui::Ui, title: &str, id: &str, games: &[TicketSummary]) {
    ui.heading(title);
    if games.is_empty() {
        ui.weak("No games in this ranking.");
        return;
    }

    egui::Grid::new(id)
        .striped(true)
        .num_columns(7)
        .min_col_width(80.0)
        .show(ui, |ui| {
            header(ui, "Game");
            header(ui, "Avg prize");
            header(ui, "Remaining prizes");
            header(ui, "Total prizes");
            header(ui, "Remaining");
            header(ui, "Expected value");
            header(ui, "Value score");
            ui.end_row();

            for game in games {
                ui.label(&game.name);
                ui.monospace(format::usd(game.prize_amount));
                ui.monospace(format::count(game.remaining_prizes));
                ui.monospace(format::count(game.total_prizes));
                ui.monospace(format::percent(game.remaining_ratio));
                ui.monospace(format::usd(game.expected_value));
                ui.monospace(value_score_text(game.value_score));
                ui.end_row();
            }
        });
}

fn header(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).strong());
}

/// Value-score cell text; older snapshot vintages lack the field entirely.
fn value_score_text(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{score:.3}"),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_score_shows_three_decimals() {
        assert_eq!(value_score_text(Some(0.4555)), "0.456");
        assert_eq!(value_score_text(Some(0.0)), "0.000");
    }

    #[test]
    fn missing_value_score_shows_a_dash_not_zero() {
        assert_eq!(value_score_text(None), "—");
    }
}
