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

//! The view loader: one concurrent batch of fetches per activation.
//!
//! All configured endpoints are fetched in parallel and every request runs to
//! completion before the batch is evaluated (join semantics, no fail-fast).
//! The outcome is all-or-nothing: a single failing endpoint fails the whole
//! batch and no partial slot is surfaced. Specific causes are logged here and
//! collapsed into one generic user-facing message.

use std::fmt;
use std::thread;

use crate::api::{ApiError, TicketApi, endpoints};
use crate::state::Dashboard;

/// The one message the user ever sees for a failed load.
const USER_MESSAGE: &str = "Ticket data is unavailable right now. Reload to try again.";

/// A failed batch: every endpoint failure it accumulated.
#[derive(Debug)]
pub struct LoadError {
    failures: Vec<ApiError>,
}

impl LoadError {
    /// The generic user-facing message; never exposes the specific cause.
    pub fn user_message(&self) -> String {
        USER_MESSAGE.to_string()
    }

    /// The underlying endpoint failures, for diagnostics.
    pub fn failures(&self) -> &[ApiError] {
        &self.failures
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dashboard load failed ({} endpoint(s)):", self.failures.len())?;
        for failure in &self.failures {
            write!(f, " [{failure}]")?;
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {}

/// Fetches all four endpoints concurrently and assembles the payload.
///
/// Issues exactly one batch of requests; no retries, caching, or polling.
pub fn load_dashboard(api: &(dyn TicketApi + Sync)) -> Result<Dashboard, LoadError> {
    log::info!("Loading dashboard: fetching 4 endpoints concurrently");

    let (best_any, best_grand, recommendation, history) = thread::scope(|s| {
        let best_any = s.spawn(|| api.best_any());
        let best_grand = s.spawn(|| api.best_grand());
        let recommendation = s.spawn(|| api.recommendation());
        let history = s.spawn(|| api.history());
        (
            settle(best_any, endpoints::BEST_ANY),
            settle(best_grand, endpoints::BEST_GRAND),
            settle(recommendation, endpoints::RECOMMENDATION),
            settle(history, endpoints::HISTORY),
        )
    });

    match (best_any, best_grand, recommendation, history) {
        (Ok(best_any), Ok(best_grand), Ok(recommendation), Ok(history)) => {
            log::info!(
                "Dashboard loaded: {} best-any games, {} best-grand games, {} history snapshots",
                best_any.len(),
                best_grand.len(),
                history.len()
            );
            Ok(Dashboard::assemble(best_any, best_grand, recommendation, history))
        }
        (best_any, best_grand, recommendation, history) => {
            let failures: Vec<ApiError> = [
                best_any.err(),
                best_grand.err(),
                recommendation.err(),
                history.err(),
            ]
            .into_iter()
            .flatten()
            .collect();
            for failure in &failures {
                log::error!("Dashboard endpoint failed: {failure}");
            }
            Err(LoadError { failures })
        }
    }
}

/// Joins one fetch thread, mapping a worker panic to a transport failure so
/// the batch still settles.
fn settle<T>(
    handle: thread::ScopedJoinHandle<'_, Result<T, ApiError>>,
    endpoint: &'static str,
) -> Result<T, ApiError> {
    handle.join().unwrap_or_else(|_| {
        Err(ApiError::Transport {
            endpoint,
            detail: "fetch worker panicked".to_string(),
        })
    })
}

/// Stubs shared with other modules' tests.
#[cfg(test)]
pub(crate) mod tests_support {
    use crate::api::{ApiError, HistorySnapshot, Recommendation, TicketApi, TicketSummary, endpoints};

    /// A service where every endpoint answers HTTP 503.
    pub(crate) struct FailingApi;

    /// Builds the always-failing stub service.
    pub(crate) fn always_failing() -> FailingApi {
        FailingApi
    }

    fn unavailable<T>(endpoint: &'static str) -> Result<T, ApiError> {
        Err(ApiError::Status {
            endpoint,
            status: 503,
        })
    }

    impl TicketApi for FailingApi {
        fn best_any(&self) -> Result<Vec<TicketSummary>, ApiError> {
            unavailable(endpoints::BEST_ANY)
        }

        fn best_grand(&self) -> Result<Vec<TicketSummary>, ApiError> {
            unavailable(endpoints::BEST_GRAND)
        }

        fn recommendation(&self) -> Result<Recommendation, ApiError> {
            unavailable(endpoints::RECOMMENDATION)
        }

        fn history(&self) -> Result<Vec<HistorySnapshot>, ApiError> {
            unavailable(endpoints::HISTORY)
        }
    }
}
