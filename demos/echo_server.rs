//! Echo server for exercising the client helpers.
//!
//! Every route answers with `{"code", "message", "data"}` where `data` echoes
//! the request's content type, query parameters, form fields and raw body.
//! `POST /test` expects a JSON object and answers `400` otherwise.
//!
//! Run with: cargo run --example echo_server

use axum::{
    extract::Query,
    http::{header, HeaderMap, StatusCode},
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use bytes::Bytes;
use flow_core_http::{request_id_middleware, RequestId};
use serde_json::{json, Map, Value};
use std::collections::HashMap;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = Router::new()
        .route("/hello", get(echo))
        .route("/testPost", post(echo))
        .route("/test", post(echo_json))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:8080")
        .await
        .expect("bind 127.0.0.1:8080");
    tracing::info!("echo server listening on http://127.0.0.1:8080");

    axum::serve(listener, app).await.expect("server error");
}

fn echoed(headers: &HeaderMap, query: HashMap<String, String>, body: &Bytes) -> Value {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();

    let post: Map<String, Value> = if content_type.starts_with("application/x-www-form-urlencoded") {
        url::form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), Value::String(v.into_owned())))
            .collect()
    } else {
        Map::new()
    };

    json!({
        "type": content_type,
        "post": post,
        "get": query,
        "input": String::from_utf8_lossy(body),
    })
}

async fn echo(
    request_id: RequestId,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> impl IntoResponse {
    tracing::info!(%request_id, bytes = body.len(), "echo");
    Json(json!({
        "code": 200,
        "message": "ok",
        "data": echoed(&headers, query, &body),
    }))
}

async fn echo_json(
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
    body: Bytes,
) -> impl IntoResponse {
    let data = echoed(&headers, query, &body);
    match serde_json::from_slice::<Value>(&body) {
        Ok(Value::Object(_)) => (
            StatusCode::OK,
            Json(json!({"code": 200, "message": "ok", "data": data})),
        ),
        _ => (
            StatusCode::BAD_REQUEST,
            Json(json!({"code": 400, "message": "expected a JSON object", "data": data})),
        ),
    }
}
