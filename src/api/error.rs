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

//! Error types for the remote API layer.
//!
//! The user only ever sees one generic "data unavailable" message; these
//! variants exist so the log records which endpoint failed and how.

use std::fmt;

/// A failure while fetching or decoding one endpoint.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be sent or the connection dropped mid-flight.
    Transport {
        /// The endpoint path segment the request targeted.
        endpoint: &'static str,
        /// The underlying transport error, stringified.
        detail: String,
    },
    /// The service answered with a non-success status code.
    Status {
        /// The endpoint path segment the request targeted.
        endpoint: &'static str,
        /// The HTTP status code received.
        status: u16,
    },
    /// The response body was not valid JSON for the expected shape.
    Decode {
        /// The endpoint path segment the request targeted.
        endpoint: &'static str,
        /// The underlying decode error, stringified.
        detail: String,
    },
}

impl ApiError {
    /// The endpoint this failure originated from.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiError::Transport { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport { endpoint, detail } => {
                write!(f, "Request to '/{endpoint}' failed: {detail}")
            }
            ApiError::Status { endpoint, status } => {
                write!(f, "Endpoint '/{endpoint}' returned HTTP {status}")
            }
            ApiError::Decode { endpoint, detail } => {
                write!(f, "Response from '/{endpoint}' was not valid JSON: {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_display() {
        let err = ApiError::Transport {
            endpoint: "history",
            detail: "connection refused".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Request to '/history' failed: connection refused"
        );
        assert_eq!(err.endpoint(), "history");
    }

    #[test]
    fn status_error_display() {
        let err = ApiError::Status {
            endpoint: "best_any",
            status: 404,
        };
        assert_eq!(format!("{err}"), "Endpoint '/best_any' returned HTTP 404");
    }

    #[test]
    fn decode_error_display() {
        let err = ApiError::Decode {
            endpoint: "recommendation",
            detail: "expected value at line 1 column 1".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Response from '/recommendation' was not valid JSON: expected value at line 1 column 1"
        );
    }
}
