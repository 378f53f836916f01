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

//! Client layer for the remote scratch-off statistics service.
//!
//! The service is an opaque collaborator: it returns ready-made JSON and this
//! crate never computes statistics of its own. [`TicketApi`] is the seam the
//! view loader consumes, so everything above this module can be exercised
//! against a stub instead of the network.

mod client;
mod error;
mod model;

pub use client::ApiClient;
pub use error::ApiError;
pub use model::{HistorySnapshot, Recommendation, TicketSummary};

/// Endpoint path segments, relative to the configured base URL.
pub mod endpoints {
    /// Top games ranked by remaining prizes.
    pub const BEST_ANY: &str = "best_any";
    /// Top games ranked by grand prizes remaining.
    pub const BEST_GRAND: &str = "best_grand";
    /// The single best game by the service's blended score.
    pub const RECOMMENDATION: &str = "recommendation";
    /// Ordered sequence of historical snapshots.
    pub const HISTORY: &str = "history";
}

/// The fixed set of read-only resources the dashboard consumes.
///
/// One method per endpoint; each issues a single GET and decodes the body.
/// Implementations must be callable from multiple threads at once, since the
/// loader fetches all endpoints concurrently.
pub trait TicketApi {
    /// `GET /best_any` — top games by remaining prizes.
    fn best_any(&self) -> Result<Vec<TicketSummary>, ApiError>;

    /// `GET /best_grand` — top games by grand prizes remaining.
    fn best_grand(&self) -> Result<Vec<TicketSummary>, ApiError>;

    /// `GET /recommendation` — the single recommended game.
    fn recommendation(&self) -> Result<Recommendation, ApiError>;

    /// `GET /history` — all historical snapshots, oldest first.
    fn history(&self) -> Result<Vec<HistorySnapshot>, ApiError>;
}
