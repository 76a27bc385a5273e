//! Stub API server for integration tests.
//!
//! Each test starts its own axum router on an ephemeral port and points an
//! `ApiClient` at the returned origin.

#![allow(dead_code)]

use axum::{
    http::{HeaderMap, Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use ratatui::text::Line;
use serde_json::{json, Map, Value};
use std::io;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tracing::subscriber::DefaultGuard;

use api_dash::state::{AppState, SharedState};

/// Serve `router` on 127.0.0.1 with a random port and return its origin
pub async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Origin where nothing is listening
pub async fn dead_origin() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

pub fn info_payload() -> Value {
    json!({
        "name": "demo-api",
        "version": "1.0",
        "description": "x",
        "environment": "production"
    })
}

pub fn health_payload() -> Value {
    json!({
        "status": "healthy",
        "environment": "production",
        "version": "1.0.0"
    })
}

/// The three dashboard endpoints, with `items` as the `/api/items` body
pub fn api_router(items: Value) -> Router {
    Router::new()
        .route("/api/info", get(|| async { Json(info_payload()) }))
        .route("/health", get(|| async { Json(health_payload()) }))
        .route("/api/items", get(move || async move { Json(items) }))
        .route("/echo", any(echo))
}

/// Only `/api/info`, answering with `info`
pub fn info_router(info: Value) -> Router {
    Router::new().route("/api/info", get(move || async move { Json(info) }))
}

/// Same as `api_router`, but `/api/items` answers after `delay`
pub fn slow_items_router(items: Value, delay: Duration) -> Router {
    Router::new().route(
        "/api/items",
        get(move || async move {
            tokio::time::sleep(delay).await;
            Json(items)
        }),
    )
}

/// Every path answers with `status`
pub fn status_router(status: StatusCode) -> Router {
    Router::new().fallback(move || async move { (status, Json(json!({"error": "nope"}))) })
}

/// Every path answers 200 with a body that is not JSON
pub fn malformed_router() -> Router {
    Router::new().fallback(|| async { (StatusCode::OK, "{\"name\": \"demo-api\"") })
}

/// Reflects method, headers and body back as JSON
async fn echo(method: Method, headers: HeaderMap, body: String) -> Json<Value> {
    let headers: Map<String, Value> = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                Value::String(value.to_str().unwrap_or_default().to_string()),
            )
        })
        .collect();

    Json(json!({
        "method": method.as_str(),
        "headers": headers,
        "body": body,
    }))
}

pub fn new_state() -> SharedState {
    Arc::new(RwLock::new(AppState::default()))
}

pub fn lines_text(lines: &[Line]) -> String {
    lines
        .iter()
        .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Log output captured on the current thread
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Route this thread's `tracing` events into a buffer until the guard drops
pub fn capture_logs() -> (DefaultGuard, LogBuffer) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    (tracing::subscriber::set_default(subscriber), buffer)
}
