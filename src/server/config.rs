//! Server-side configuration for the request-id middleware.

use crate::protocol::constants::headers;
use http::HeaderName;
use serde::{Deserialize, Serialize};

/// Configuration for [`RequestIdLayer`](super::RequestIdLayer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Header carrying the request id on requests and responses
    pub header_name: String,
}

impl ServerConfig {
    /// The configured header as a `HeaderName`.
    ///
    /// Falls back to `x-request-id` when `header_name` is not a valid header
    /// name.
    pub fn header(&self) -> HeaderName {
        match HeaderName::from_bytes(self.header_name.as_bytes()) {
            Ok(name) => name,
            Err(_) => {
                tracing::warn!(
                    header_name = %self.header_name,
                    "invalid request id header name, using {}",
                    headers::X_REQUEST_ID
                );
                headers::X_REQUEST_ID
            }
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            header_name: headers::X_REQUEST_ID.as_str().to_string(),
        }
    }
}
