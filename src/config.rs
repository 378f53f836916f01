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

//! Application configuration.
//!
//! The only knob is the API base URL: a fixed default pointing at a local
//! service instance, overridable through `SCRATCHVIEW_API_URL`.

/// Base URL used when no override is present.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "SCRATCHVIEW_API_URL";

/// Where the dashboard fetches its data from.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL, without a trailing slash.
    pub base_url: String,
}

impl ApiConfig {
    /// Builds a configuration from an explicit base URL.
    ///
    /// Trailing slashes and surrounding whitespace are stripped so endpoint
    /// paths can always be appended with a single `/`.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Reads the configuration from the environment, falling back to the
    /// default base URL.
    pub fn from_env() -> Self {
        Self::resolve(std::env::var(BASE_URL_ENV).ok())
    }

    /// Applies an optional override on top of the default.
    ///
    /// An unset or blank override keeps the default base URL.
    fn resolve(override_url: Option<String>) -> Self {
        match override_url {
            Some(url) if !url.trim().is_empty() => {
                log::info!("Using API base URL from {BASE_URL_ENV}: {url}");
                Self::with_base_url(&url)
            }
            _ => Self::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_service() {
        assert_eq!(ApiConfig::default().base_url, "http://127.0.0.1:5000/api");
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let config = ApiConfig::with_base_url("https://example.org/api/");
        assert_eq!(config.base_url, "https://example.org/api");
    }

    #[test]
    fn with_base_url_strips_whitespace() {
        let config = ApiConfig::with_base_url("  https://example.org/api \n");
        assert_eq!(config.base_url, "https://example.org/api");
    }

    #[test]
    fn resolve_without_override_keeps_the_default() {
        assert_eq!(ApiConfig::resolve(None), ApiConfig::default());
    }

    #[test]
    fn resolve_applies_an_override() {
        let config = ApiConfig::resolve(Some("https://stats.example.org/api/".to_string()));
        assert_eq!(config.base_url, "https://stats.example.org/api");
    }

    #[test]
    fn resolve_treats_a_blank_override_as_unset() {
        assert_eq!(
            ApiConfig::resolve(Some("   ".to_string())),
            ApiConfig::default()
        );
        assert_eq!(
            ApiConfig::resolve(Some(String::new())),
            ApiConfig::default()
        );
    }
}
