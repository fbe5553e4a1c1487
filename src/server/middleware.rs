//! Axum middleware that stamps every request with a fresh id.
//!
//! # Usage
//!
//! ```ignore
//! use axum::{middleware, routing::get, Router};
//! use flow_core_http::server::request_id_middleware;
//!
//! let app = Router::new()
//!     .route("/resource", get(handler))
//!     .layer(middleware::from_fn(request_id_middleware));
//! ```
//!
//! # How It Works
//!
//! For each request the middleware:
//! 1. Generates a UUID v4, ignoring any id the caller sent
//! 2. Appends it to the request's `X-Request-Id` header; a caller-supplied
//!    value stays in place as an earlier entry
//! 3. Stores it as a [`RequestId`] in the request extensions
//! 4. Runs the inner service inside a `request` tracing span tagged with the id
//! 5. Sets the same id as the response's `X-Request-Id`

use super::config::ServerConfig;
use crate::protocol::constants::headers;
use axum::{
    extract::{FromRequestParts, Request},
    http::{request::Parts, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use tracing::Instrument;
use uuid::Uuid;

/// Generate a new request id (hyphenated UUID v4).
pub fn gen_request_id() -> String {
    Uuid::new_v4().to_string()
}

/// The id assigned to the current request.
///
/// Available to handlers as an extractor once the middleware is installed.
/// Extracting it without the middleware rejects with `500`.
///
/// # Examples
///
/// ```ignore
/// use flow_core_http::RequestId;
///
/// async fn handler(request_id: RequestId) -> String {
///     format!("handled {}", request_id)
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Wrap an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        RequestId(id.into())
    }

    /// Generate a fresh id.
    pub fn generate() -> Self {
        RequestId(gen_request_id())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for RequestId
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts.extensions.get::<RequestId>().cloned().ok_or((
            StatusCode::INTERNAL_SERVER_ERROR,
            "request id middleware is not installed",
        ))
    }
}

/// Middleware stamping requests and responses with `X-Request-Id`.
///
/// Use with `axum::middleware::from_fn`. For a different header name, see
/// [`RequestIdLayer`].
pub async fn request_id_middleware(req: Request, next: Next) -> Response {
    stamp_request(headers::X_REQUEST_ID, req, next).await
}

async fn stamp_request(header: HeaderName, mut req: Request, next: Next) -> Response {
    let request_id = RequestId::generate();
    let value = HeaderValue::from_str(request_id.as_str()).ok();

    if let Some(value) = &value {
        req.headers_mut().append(header.clone(), value.clone());
    }
    req.extensions_mut().insert(request_id.clone());

    let span = tracing::info_span!("request", request_id = %request_id);
    let mut response = next.run(req).instrument(span).await;

    if let Some(value) = value {
        response.headers_mut().insert(header, value);
    }

    response
}

/// Request-id middleware with configurable header name.
///
/// # Usage
///
/// ```ignore
/// use axum::{middleware, routing::get, Router};
/// use flow_core_http::{RequestIdLayer, ServerConfig};
///
/// let layer = RequestIdLayer::with_config(ServerConfig {
///     header_name: "x-trace-id".to_string(),
/// });
///
/// let app = Router::new()
///     .route("/resource", get(handler))
///     .layer(middleware::from_fn(layer.middleware()));
/// ```
#[derive(Clone, Debug)]
pub struct RequestIdLayer {
    config: ServerConfig,
    header: HeaderName,
}

impl RequestIdLayer {
    /// Layer using `X-Request-Id`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Layer using the header named in `config`.
    #[must_use]
    pub fn with_config(config: ServerConfig) -> Self {
        let header = config.header();
        Self { config, header }
    }

    /// Get a reference to the layer's configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Header the layer writes.
    #[inline]
    #[must_use]
    pub fn header(&self) -> &HeaderName {
        &self.header
    }

    /// Create the middleware function for use with `axum::middleware::from_fn`.
    #[must_use]
    pub fn middleware(
        &self,
    ) -> impl Fn(Request, Next) -> Pin<Box<dyn Future<Output = Response> + Send>>
           + Send
           + Sync
           + Clone {
        let header = self.header.clone();

        move |req: Request, next: Next| {
            let header = header.clone();
            Box::pin(stamp_request(header, req, next))
        }
    }
}

impl Default for RequestIdLayer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::HeaderMap, middleware, routing::get, Router};
    use tower::ServiceExt;

    async fn echo(headers: HeaderMap, request_id: RequestId) -> String {
        let seen: Vec<&str> = headers
            .get_all(headers::X_REQUEST_ID)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect();
        format!("{}|{}", request_id, seen.join(","))
    }

    async fn call(app: Router, request: axum::http::Request<Body>) -> (HeaderMap, String) {
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (headers, String::from_utf8(body.to_vec()).unwrap())
    }

    fn app() -> Router {
        Router::new()
            .route("/", get(echo))
            .layer(middleware::from_fn(request_id_middleware))
    }

    #[test]
    fn test_gen_request_id_is_uuid() {
        let id = gen_request_id();
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(id, gen_request_id());
    }

    #[test]
    fn test_request_id_display() {
        let id = RequestId::new("abc");
        assert_eq!(id.to_string(), "abc");
        assert_eq!(id.as_str(), "abc");
        assert_eq!(id.into_inner(), "abc");
    }

    #[tokio::test]
    async fn test_middleware_stamps_request_and_response() {
        let request = axum::http::Request::builder()
            .uri("/")
            .body(Body::empty())
            .unwrap();
        let (headers, body) = call(app(), request).await;

        let response_id = headers[headers::X_REQUEST_ID].to_str().unwrap();
        assert!(Uuid::parse_str(response_id).is_ok());
        assert_eq!(body, format!("{0}|{0}", response_id));
    }

    #[tokio::test]
    async fn test_middleware_appends_to_incoming_header() {
        let request = axum::http::Request::builder()
            .uri("/")
            .header("X-Request-Id", "from-upstream")
            .body(Body::empty())
            .unwrap();
        let (headers, body) = call(app(), request).await;

        let response_id = headers[headers::X_REQUEST_ID].to_str().unwrap();
        assert_ne!(response_id, "from-upstream");
        assert_eq!(headers.get_all(headers::X_REQUEST_ID).iter().count(), 1);
        assert_eq!(body, format!("{0}|from-upstream,{0}", response_id));
    }

    #[tokio::test]
    async fn test_each_request_gets_new_id() {
        let app = app();
        let first = call(app.clone(), axum::http::Request::new(Body::empty())).await;
        let second = call(app, axum::http::Request::new(Body::empty())).await;
        assert_ne!(
            first.0[headers::X_REQUEST_ID],
            second.0[headers::X_REQUEST_ID]
        );
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_rejects() {
        let app = Router::new().route("/", get(echo));
        let response = app
            .oneshot(axum::http::Request::new(Body::empty()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_layer_uses_configured_header() {
        let layer = RequestIdLayer::with_config(ServerConfig {
            header_name: "X-Trace-Id".to_string(),
        });
        assert_eq!(layer.header().as_str(), "x-trace-id");

        async fn trace_header(headers: HeaderMap, request_id: RequestId) -> String {
            let seen = headers
                .get("x-trace-id")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            assert_eq!(seen, request_id.as_str());
            seen
        }

        let app = Router::new()
            .route("/", get(trace_header))
            .layer(middleware::from_fn(layer.middleware()));
        let (headers, body) = call(app, axum::http::Request::new(Body::empty())).await;

        assert!(headers.get(headers::X_REQUEST_ID).is_none());
        assert_eq!(headers["x-trace-id"].to_str().unwrap(), body);
    }
}
