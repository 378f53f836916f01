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

//! Typed views of the JSON payloads returned by the statistics service.

use serde::Deserialize;

/// One scratch-off game's statistics, exactly as the service precomputed them.
///
/// Read-only snapshot: produced entirely by the remote service and never
/// mutated locally.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TicketSummary {
    /// Display name of the game.
    pub name: String,
    /// Mean prize amount across the game's prize tiers, in dollars.
    pub prize_amount: f64,
    /// Unclaimed prizes across all tiers.
    pub remaining_prizes: u64,
    /// Total prizes the game was printed with.
    pub total_prizes: u64,
    /// `prize_amount * remaining_ratio`, the service's value estimate.
    pub expected_value: f64,
    /// Unclaimed prizes in the game's top tier.
    pub grand_prizes_remaining: u64,
    /// `remaining_prizes / total_prizes`, in `[0, 1]`.
    pub remaining_ratio: f64,
    /// `expected_value / prize_amount`; absent from some snapshot vintages.
    #[serde(default)]
    pub value_score: Option<f64>,
}

/// The service's single recommended game.
///
/// The record is TicketSummary-shaped with the blended ranking score the
/// service sorted by appended. Normalization intermediates the service also
/// emits are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Recommendation {
    /// The recommended game's statistics.
    #[serde(flatten)]
    pub game: TicketSummary,
    /// Blended score (weighted value, volume, and grand-prize components).
    #[serde(default)]
    pub smart_score: Option<f64>,
}

/// One historical capture of the whole dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistorySnapshot {
    /// ISO-8601 instant at which the snapshot was taken.
    pub timestamp: String,
    /// Every game's statistics at that instant.
    pub data: Vec<TicketSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAME_JSON: &str = r#"{
        "name": "Win For Life",
        "prize_amount": 1250.5,
        "remaining_prizes": 83210,
        "total_prizes": 120000,
        "expected_value": 867.2,
        "grand_prizes_remaining": 3,
        "remaining_ratio": 0.6934,
        "value_score": 0.6934
    }"#;

    #[test]
    fn ticket_summary_deserializes() {
        let game: TicketSummary = serde_json::from_str(GAME_JSON).unwrap();
        assert_eq!(game.name, "Win For Life");
        assert_eq!(game.remaining_prizes, 83210);
        assert_eq!(game.grand_prizes_remaining, 3);
        assert!((game.remaining_ratio - 0.6934).abs() < 1e-9);
        assert_eq!(game.value_score, Some(0.6934));
    }

    #[test]
    fn ticket_summary_tolerates_missing_value_score() {
        let json = r#"{
            "name": "Cashword",
            "prize_amount": 10.0,
            "remaining_prizes": 100,
            "total_prizes": 200,
            "expected_value": 5.0,
            "grand_prizes_remaining": 1,
            "remaining_ratio": 0.5
        }"#;
        let game: TicketSummary = serde_json::from_str(json).unwrap();
        assert_eq!(game.value_score, None);
    }

    #[test]
    fn recommendation_flattens_game_and_keeps_score() {
        let json = r#"{
            "name": "Set For Life",
            "prize_amount": 5000.0,
            "remaining_prizes": 41000,
            "total_prizes": 90000,
            "expected_value": 2277.7,
            "grand_prizes_remaining": 2,
            "remaining_ratio": 0.4555,
            "value_score": 0.4555,
            "value_norm": 0.91,
            "prize_norm": 0.4,
            "grand_norm": 0.66,
            "smart_score": 0.707
        }"#;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.game.name, "Set For Life");
        assert_eq!(rec.smart_score, Some(0.707));
    }

    #[test]
    fn history_snapshot_deserializes() {
        let json = format!(
            r#"[{{"timestamp": "2025-11-02T08:00:00", "data": [{GAME_JSON}]}}]"#
        );
        let history: Vec<HistorySnapshot> = serde_json::from_str(&json).unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].timestamp, "2025-11-02T08:00:00");
        assert_eq!(history[0].data[0].name, "Win For Life");
    }
}
