//! Axum server integration.
//!
//! Provides the request-id middleware: every request passing through it gets a
//! freshly generated id, visible to handlers through the [`RequestId`]
//! extractor and echoed back to the caller in the response headers.
//!
//! # Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`request_id_middleware`] | Middleware function for `axum::middleware::from_fn` |
//! | [`RequestIdLayer`] | Same middleware with a configurable header |
//! | [`RequestId`] | Extension / extractor holding the id |
//! | [`ServerConfig`] | Middleware configuration |

mod config;
mod middleware;

pub use config::ServerConfig;
pub use middleware::{gen_request_id, request_id_middleware, RequestId, RequestIdLayer};
