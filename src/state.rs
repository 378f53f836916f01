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

//! View state for the dashboard.
//!
//! The lifecycle is one owned three-variant record rather than a set of
//! independent loading/error flags: exactly one variant holds at any time,
//! and the only legal transitions are Loading → Ready and Loading → Error.

use crate::api::{HistorySnapshot, Recommendation, TicketSummary};
use crate::movers::{self, Movers};

/// Everything the Ready view renders, assembled from one settled batch.
///
/// Fully replaced on each activation, never merged incrementally.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Top games by remaining prizes.
    pub best_any: Vec<TicketSummary>,
    /// Top games by grand prizes remaining.
    pub best_grand: Vec<TicketSummary>,
    /// The service's recommended game.
    pub recommendation: Recommendation,
    /// All historical snapshots, oldest first.
    pub history: Vec<HistorySnapshot>,
    /// Timestamp of the latest snapshot, absent when history is empty.
    pub last_updated: Option<String>,
    /// Expected-value movers, absent until two snapshots exist.
    pub movers: Option<Movers>,
}

impl Dashboard {
    /// Assembles the payload from the four fetched slots and derives the
    /// last-updated instant and the movers from history.
    pub fn assemble(
        best_any: Vec<TicketSummary>,
        best_grand: Vec<TicketSummary>,
        recommendation: Recommendation,
        history: Vec<HistorySnapshot>,
    ) -> Self {
        let last_updated = history.last().map(|snapshot| snapshot.timestamp.clone());
        let movers = movers::derive(&history);
        Self {
            best_any,
            best_grand,
            recommendation,
            history,
            last_updated,
            movers,
        }
    }
}

/// The three-way lifecycle driving what the view renders.
#[derive(Debug)]
pub enum LoadState {
    /// The activation's batch of fetches is still in flight.
    Loading,
    /// The batch failed; holds the generic user-facing message.
    Error(String),
    /// The batch succeeded; holds the assembled payload.
    Ready(Dashboard),
}

impl LoadState {
    /// Settles the lifecycle with the batch outcome.
    ///
    /// Only legal from `Loading`; once settled, further outcomes are rejected
    /// and the state is left untouched. Returns whether the transition was
    /// applied.
    pub fn settle(&mut self, outcome: Result<Dashboard, String>) -> bool {
        if !matches!(self, LoadState::Loading) {
            return false;
        }
        *self = match outcome {
            Ok(dashboard) => LoadState::Ready(dashboard),
            Err(message) => LoadState::Error(message),
        };
        true
    }
}

impl Default for LoadState {
    fn default() -> Self {
        LoadState::Loading
    }
}
