//! The HTTP client used by the helpers.
//!
//! # Examples
//!
//! ## Build, send, buffer
//!
//! ```ignore
//! use flow_core_http::client::{new_get_request, read_body, HttpClient};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(Duration::from_secs(5));
//!     let request = new_get_request("http://localhost:8080/hello", None)?;
//!     let response = client.execute(request).await?;
//!     let body = read_body(response).await?;
//!     println!("{}", String::from_utf8_lossy(&body));
//!     Ok(())
//! }
//! ```
//!
//! ## Propagating a request id
//!
//! ```ignore
//! use axum::extract::State;
//! use flow_core_http::{client::new_json_post_request, HttpClient, RequestId};
//!
//! async fn handler(State(client): State<HttpClient>, request_id: RequestId) -> String {
//!     let request = new_json_post_request("http://billing/charge", Some(&serde_json::json!({"amount": 1})))
//!         .expect("static url");
//!     match client.execute_with_request_id(request, &request_id).await {
//!         Ok(response) => response.status().to_string(),
//!         Err(e) => e.to_string(),
//!     }
//! }
//! ```

use crate::client::request::{new_form_post_request, new_get_request, new_json_post_request, Params};
use crate::client::{config::ClientConfig, BufferedResponse};
use crate::error::{FlowError, Result};
use crate::protocol::constants::headers;
use crate::server::RequestId;
use reqwest::header::HeaderValue;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client with a fixed per-request timeout.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl HttpClient {
    /// Create a client whose requests time out after `timeout`.
    ///
    /// If the underlying client cannot be built, reqwest's default client is
    /// used instead. Use [`HttpClient::with_config`] to get the error.
    pub fn new(timeout: Duration) -> Self {
        let config = ClientConfig::with_timeout(timeout);
        let client = build_client(&config).unwrap_or_default();
        HttpClient {
            client,
            config: Arc::new(config),
        }
    }

    /// Create a client from a full configuration.
    ///
    /// # Errors
    ///
    /// [`FlowError::Config`] when `proxy_url` is set but invalid,
    /// [`FlowError::Http`] when the TLS backend or resolver cannot start.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(HttpClient {
            client,
            config: Arc::new(config),
        })
    }

    /// Send a prepared request.
    ///
    /// Any status code is a successful send; only transport failures and
    /// timeouts are errors.
    pub async fn execute(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        let method = request.method().clone();
        let url = request.url().clone();

        match self.client.execute(request).await {
            Ok(response) => {
                if self.config.enable_logging {
                    tracing::debug!(
                        %method,
                        %url,
                        status = response.status().as_u16(),
                        "request completed"
                    );
                }
                Ok(response)
            }
            Err(e) => {
                if self.config.enable_logging {
                    tracing::warn!(%method, %url, error = %e, "request failed");
                }
                Err(e.into())
            }
        }
    }

    /// Send a prepared request carrying `request_id` in `X-Request-Id`.
    ///
    /// Replaces any `X-Request-Id` already on the request.
    pub async fn execute_with_request_id(
        &self,
        mut request: reqwest::Request,
        request_id: &RequestId,
    ) -> Result<reqwest::Response> {
        let value = HeaderValue::from_str(request_id.as_str())
            .map_err(|e| FlowError::Http(format!("invalid request id '{}': {}", request_id, e)))?;
        request.headers_mut().insert(headers::X_REQUEST_ID, value);
        self.execute(request).await
    }

    /// GET `url` with `params` in the query string and buffer the response.
    pub async fn get(&self, url: &str, params: Option<&Params>) -> Result<BufferedResponse> {
        let request = new_get_request(url, params)?;
        BufferedResponse::from_response(self.execute(request).await?).await
    }

    /// POST `params` as a urlencoded form and buffer the response.
    pub async fn post_form(&self, url: &str, params: Option<&Params>) -> Result<BufferedResponse> {
        let request = new_form_post_request(url, params)?;
        BufferedResponse::from_response(self.execute(request).await?).await
    }

    /// POST `body` as JSON and buffer the response.
    pub async fn post_json<T>(&self, url: &str, body: Option<&T>) -> Result<BufferedResponse>
    where
        T: Serialize + ?Sized,
    {
        let request = new_json_post_request(url, body)?;
        BufferedResponse::from_response(self.execute(request).await?).await
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new(ClientConfig::default().request_timeout())
    }
}

fn build_client(config: &ClientConfig) -> Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .timeout(config.request_timeout())
        .pool_idle_timeout(Duration::from_secs(90))
        .pool_max_idle_per_host(config.max_idle_per_host);

    if !config.proxy_url.is_empty() {
        let proxy = reqwest::Proxy::all(&config.proxy_url).map_err(|e| {
            FlowError::Config(format!("invalid proxy url '{}': {}", config.proxy_url, e))
        })?;
        builder = builder.proxy(proxy);
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }

    builder.build().map_err(|e| FlowError::Http(e.to_string()))
}
