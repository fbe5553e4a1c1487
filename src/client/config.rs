//! Client configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for [`HttpClient`](super::HttpClient).
///
/// Every field has a default, so a partial section in an application config
/// file deserializes cleanly.
///
/// # Examples
///
/// ```
/// use flow_core_http::client::ClientConfig;
///
/// let config = ClientConfig {
///     request_timeout_ms: 2_000,
///     enable_logging: false,
///     ..Default::default()
/// };
/// assert_eq!(config.request_timeout().as_secs(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Total time allowed for a request, connect through body, in milliseconds
    pub request_timeout_ms: u64,

    /// Idle pooled connections kept per host
    pub max_idle_per_host: usize,

    /// Proxy applied to all schemes; empty means no proxy
    pub proxy_url: String,

    /// `User-Agent` header sent with every request
    pub user_agent: Option<String>,

    /// Emit `tracing` events for each request
    pub enable_logging: bool,
}

impl ClientConfig {
    /// Default configuration with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            request_timeout_ms: u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ..Self::default()
        }
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            request_timeout_ms: 5_000,
            max_idle_per_host: 32,
            proxy_url: String::new(),
            user_agent: None,
            enable_logging: true,
        }
    }
}
