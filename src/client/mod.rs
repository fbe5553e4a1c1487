//! HTTP client helpers.
//!
//! Small wrappers over `reqwest` for talking to a running service from
//! integration tests and internal tooling:
//!
//! - **Build requests** for GET (query params), form POST and JSON POST
//! - **Send them** through a shared client with a fixed timeout
//! - **Buffer responses** whatever their status
//! - **Parse `key:value` lists** into a map
//!
//! # Module Organization
//!
//! ```text
//! client/
//! ├── config   - Client configuration
//! ├── fetch    - HttpClient and request execution
//! ├── request  - Request constructors and form encoding
//! ├── response - Response buffering
//! └── utils    - key:value list parser
//! ```
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`HttpClient`] | Timeout-bounded client |
//! | [`ClientConfig`] | Client configuration options |
//! | [`BufferedResponse`] | Status, headers and fully-read body |
//! | [`Params`] | Query / form parameters |
//!
//! # Examples
//!
//! ## Creating a Client
//!
//! ```
//! use flow_core_http::client::{ClientConfig, HttpClient};
//! use std::time::Duration;
//!
//! let client = HttpClient::new(Duration::from_secs(5));
//!
//! let config = ClientConfig {
//!     request_timeout_ms: 2_000,
//!     user_agent: Some("integration-tests".to_string()),
//!     ..Default::default()
//! };
//! let client = HttpClient::with_config(config).unwrap();
//! ```
//!
//! ## Building Requests
//!
//! ```
//! use flow_core_http::client::{new_form_post_request, Params};
//! use serde_json::json;
//!
//! let mut params = Params::new();
//! params.insert("name".into(), json!("hts"));
//! let request = new_form_post_request("http://localhost:8080/testPost", Some(&params)).unwrap();
//! assert_eq!(request.method(), "POST");
//! ```
//!
//! ## Parsing key:value Lists
//!
//! ```
//! use flow_core_http::client::string_list_to_map;
//!
//! let map = string_list_to_map(["a:1", "a:2", "broken"]);
//! assert_eq!(map["a"], "2");
//! assert_eq!(map.len(), 1);
//! ```

mod config;
mod fetch;
mod request;
mod response;
mod utils;

pub use config::ClientConfig;
pub use fetch::HttpClient;
pub use request::{encode_form, new_form_post_request, new_get_request, new_json_post_request, Params};
pub use response::{read_body, BufferedResponse};
pub use utils::*;
