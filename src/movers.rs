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

//! Gainers and losers between the two most recent history snapshots.
//!
//! Derived locally from `/history`, which the dashboard already fetches, so
//! the card simply stays absent until the service has captured at least two
//! snapshots.

use std::collections::HashMap;

use crate::api::HistorySnapshot;

/// How many gainers and losers to surface.
const TOP_N: usize = 5;

/// One game's change in expected value between the two latest snapshots.
#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    /// Display name of the game.
    pub name: String,
    /// Expected value in the latest snapshot.
    pub expected_value_now: f64,
    /// Expected value in the previous snapshot.
    pub expected_value_prev: f64,
    /// `now - prev`.
    pub change: f64,
}

/// Top movers in both directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Movers {
    /// Largest increases in expected value, descending.
    pub gainers: Vec<Mover>,
    /// Largest decreases in expected value, ascending.
    pub losers: Vec<Mover>,
}

/// Derives movers from the two most recent snapshots.
///
/// Returns `None` with fewer than two snapshots. Games are only compared when
/// they appear in both snapshots; newly introduced or retired games are
/// skipped.
pub fn derive(history: &[HistorySnapshot]) -> Option<Movers> {
    let [.., prev, latest] = history else {
        return None;
    };

    let prev_values: HashMap<&str, f64> = prev
        .data
        .iter()
        .map(|game| (game.name.as_str(), game.expected_value))
        .collect();

    let mut merged: Vec<Mover> = latest
        .data
        .iter()
        .filter_map(|game| {
            prev_values.get(game.name.as_str()).map(|&prev_value| Mover {
                name: game.name.clone(),
                expected_value_now: game.expected_value,
                expected_value_prev: prev_value,
                change: game.expected_value - prev_value,
            })
        })
        .collect();

    merged.sort_by(|a, b| b.change.total_cmp(&a.change));

    let gainers = merged.iter().take(TOP_N).cloned().collect();
    let losers = merged.iter().rev().take(TOP_N).cloned().collect();
    Some(Movers { gainers, losers })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::TicketSummary;

    fn game(name: &str, expected_value: f64) -> TicketSummary {
        TicketSummary {
            name: name.to_string(),
            prize_amount: 100.0,
            remaining_prizes: 1000,
            total_prizes: 2000,
            expected_value,
            grand_prizes_remaining: 1,
            remaining_ratio: 0.5,
            value_score: Some(0.5),
        }
    }

    fn snapshot(timestamp: &str, data: Vec<TicketSummary>) -> HistorySnapshot {
        HistorySnapshot {
            timestamp: timestamp.to_string(),
            data,
        }
    }

    #[test]
    fn fewer_than_two_snapshots_yields_none() {
        assert_eq!(derive(&[]), None);
        assert_eq!(derive(&[snapshot("t1", vec![game("A", 1.0)])]), None);
    }

    #[test]
    fn gainers_descend_and_losers_ascend() {
        let history = vec![
            snapshot("t1", vec![game("A", 10.0), game("B", 20.0), game("C", 30.0)]),
            snapshot("t2", vec![game("A", 15.0), game("B", 14.0), game("C", 31.0)]),
        ];
        let movers = derive(&history).unwrap();

        assert_eq!(movers.gainers[0].name, "A");
        assert!((movers.gainers[0].change - 5.0).abs() < 1e-9);
        assert_eq!(movers.gainers[1].name, "C");

        assert_eq!(movers.losers[0].name, "B");
        assert!((movers.losers[0].change - -6.0).abs() < 1e-9);
    }

    #[test]
    fn only_the_two_latest_snapshots_are_compared() {
        let history = vec![
            snapshot("t1", vec![game("A", 100.0)]),
            snapshot("t2", vec![game("A", 10.0)]),
            snapshot("t3", vec![game("A", 12.0)]),
        ];
        let movers = derive(&history).unwrap();
        assert!((movers.gainers[0].change - 2.0).abs() < 1e-9);
    }

    #[test]
    fn games_missing_from_either_snapshot_are_skipped() {
        let history = vec![
            snapshot("t1", vec![game("Retired", 5.0), game("A", 1.0)]),
            snapshot("t2", vec![game("Brand New", 9.0), game("A", 2.0)]),
        ];
        let movers = derive(&history).unwrap();
        assert_eq!(movers.gainers.len(), 1);
        assert_eq!(movers.gainers[0].name, "A");
    }

    #[test]
    fn at_most_five_movers_per_direction() {
        let prev: Vec<TicketSummary> = (0..8).map(|i| game(&format!("G{i}"), 10.0)).collect();
        let latest: Vec<TicketSummary> = (0..8)
            .map(|i| game(&format!("G{i}"), 10.0 + i as f64))
            .collect();
        let movers = derive(&[snapshot("t1", prev), snapshot("t2", latest)]).unwrap();
        assert_eq!(movers.gainers.len(), 5);
        assert_eq!(movers.losers.len(), 5);
        assert_eq!(movers.gainers[0].name, "G7");
        assert_eq!(movers.losers[0].name, "G0");
    }
}
