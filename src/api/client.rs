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

//! Blocking HTTP client for the statistics service.

use anyhow::Context as _;
use serde::de::DeserializeOwned;

use super::{ApiError, HistorySnapshot, Recommendation, TicketApi, TicketSummary, endpoints};
use crate::config::ApiConfig;

/// Concrete [`TicketApi`] implementation over blocking `reqwest`.
///
/// Cheap to clone (the underlying connection pool is shared), so each fetch
/// worker gets its own handle.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client for the given configuration.
    ///
    /// No request timeout is set: a hung call hangs that activation's load,
    /// and the user recovers by reloading.
    pub fn new(config: &ApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(None)
            .build()
            .context("failed to build the HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    /// Issues one GET against `endpoint` and decodes the JSON body.
    fn get_json<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {url}");

        let response = self
            .http
            .get(&url)
            .send()
            .map_err(|e| ApiError::Transport {
                endpoint,
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        response.json::<T>().map_err(|e| ApiError::Decode {
            endpoint,
            detail: e.to_string(),
        })
    }
}

impl TicketApi for ApiClient {
    fn best_any(&self) -> Result<Vec<TicketSummary>, ApiError> {
        self.get_json(endpoints::BEST_ANY)
    }

    fn best_grand(&self) -> Result<Vec<TicketSummary>, ApiError> {
        self.get_json(endpoints::BEST_GRAND)
    }

    fn recommendation(&self) -> Result<Recommendation, ApiError> {
        self.get_json(endpoints::RECOMMENDATION)
    }

    fn history(&self) -> Result<Vec<HistorySnapshot>, ApiError> {
        self.get_json(endpoints::HISTORY)
    }
}
