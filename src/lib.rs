#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Module Structure
//!
//! - **[client]** - HTTP client helpers: request constructors, `HttpClient`,
//!   response buffering, `key:value` list parsing
//! - **[server]** - Axum request-id middleware and the `RequestId` extractor
//! - **[protocol]** - Header names and content types
//! - **[error]** - Error types and result handling
//!
//! ## Client Usage
//!
//! ```ignore
//! use flow_core_http::client::{new_form_post_request, read_body, HttpClient, Params};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpClient::new(Duration::from_secs(5));
//!
//!     let mut params = Params::new();
//!     params.insert("name".into(), "hts".into());
//!     let request = new_form_post_request("http://localhost:8080/testPost", Some(&params))?;
//!
//!     let body = read_body(client.execute(request).await?).await?;
//!     println!("{}", String::from_utf8_lossy(&body));
//!     Ok(())
//! }
//! ```
//!
//! ## Server Usage
//!
//! ```ignore
//! use axum::{middleware, routing::get, Router};
//! use flow_core_http::{request_id_middleware, RequestId};
//!
//! async fn hello(request_id: RequestId) -> String {
//!     format!("hello from {}", request_id)
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .route("/hello", get(hello))
//!         .layer(middleware::from_fn(request_id_middleware));
//!
//!     let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod client;
pub mod error;
pub mod protocol;
pub mod server;

pub use client::{string_list_to_map, BufferedResponse, ClientConfig, HttpClient, Params};
pub use error::{FlowError, Result};
pub use server::{request_id_middleware, RequestId, RequestIdLayer, ServerConfig};
