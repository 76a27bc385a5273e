//! ApiClient against a live stub server

mod common;

use api_dash::{ApiClient, ApiError, RequestOptions};
use axum::http::StatusCode;
use common::{api_router, capture_logs, dead_origin, malformed_router, spawn, status_router};
use pretty_assertions::assert_eq;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde_json::json;

#[tokio::test]
async fn get_returns_parsed_json() {
    let origin = spawn(api_router(json!({"items": []}))).await;
    let client = ApiClient::new(&origin);

    let info = client.get("/api/info").await.unwrap();
    assert_eq!(info, common::info_payload());
}

#[tokio::test]
async fn default_content_type_is_sent() {
    let origin = spawn(api_router(json!({}))).await;
    let client = ApiClient::new(&origin);

    let echo = client.get("/echo").await.unwrap();
    assert_eq!(echo["method"], "GET");
    assert_eq!(echo["headers"]["content-type"], "application/json");
    assert_eq!(echo["body"], "");
}

#[tokio::test]
async fn caller_headers_take_precedence() {
    let origin = spawn(api_router(json!({}))).await;
    let client = ApiClient::new(&origin);

    let options = RequestOptions::default()
        .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
        .header(AUTHORIZATION, HeaderValue::from_static("Bearer token"));
    let echo = client.request("/echo", options).await.unwrap();

    assert_eq!(echo["headers"]["content-type"], "text/plain");
    assert_eq!(echo["headers"]["authorization"], "Bearer token");
}

#[tokio::test]
async fn method_and_body_can_be_overridden() {
    let origin = spawn(api_router(json!({}))).await;
    let client = ApiClient::new(&origin);

    let options = RequestOptions::default()
        .method(Method::POST)
        .json_body(json!({"name": "Item 4"}));
    let echo = client.request("/echo", options).await.unwrap();

    assert_eq!(echo["method"], "POST");
    assert_eq!(echo["headers"]["content-type"], "application/json");
    let body: serde_json::Value = serde_json::from_str(echo["body"].as_str().unwrap()).unwrap();
    assert_eq!(body, json!({"name": "Item 4"}));
}

#[tokio::test]
async fn server_error_is_status_error() {
    let origin = spawn(status_router(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let client = ApiClient::new(&origin);

    let err = client.get("/api/info").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 500 }));
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn failure_is_logged_at_error_level() {
    let origin = spawn(status_router(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let client = ApiClient::new(&origin);
    let (_guard, logs) = capture_logs();

    let err = client.get("/api/info").await.unwrap_err();
    assert_eq!(err.kind(), "status");

    let logs = logs.contents();
    let line = logs
        .lines()
        .find(|line| line.contains("Request failed"))
        .unwrap_or_else(|| panic!("no failure logged in:\n{logs}"));
    assert!(line.contains("ERROR"), "{line}");
    assert!(line.contains("kind=\"status\""), "{line}");
    assert!(line.contains("path=\"/api/info\""), "{line}");
}

#[tokio::test]
async fn success_logs_no_error() {
    let origin = spawn(api_router(json!({}))).await;
    let client = ApiClient::new(&origin);
    let (_guard, logs) = capture_logs();

    client.get("/health").await.unwrap();
    assert!(!logs.contents().contains("ERROR"));
}

#[tokio::test]
async fn unknown_path_is_status_error() {
    let origin = spawn(api_router(json!({}))).await;
    let client = ApiClient::new(&origin);

    let err = client.get("/api/missing").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let origin = spawn(malformed_router()).await;
    let client = ApiClient::new(&origin);

    let err = client.get("/api/info").await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn unreachable_server_is_network_error() {
    let client = ApiClient::new(&dead_origin().await);

    let err = client.get("/health").await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.kind(), "network");
}

#[tokio::test]
async fn non_object_payload_is_parse_error() {
    let origin = spawn(api_router(json!("just text"))).await;
    let client = ApiClient::new(&origin);

    let err = client
        .request_as::<api_dash::types::ApiInfo>("/api/items", RequestOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn request_as_decodes_payload() {
    let origin = spawn(api_router(json!({}))).await;
    let client = ApiClient::new(&format!("{origin}/"));

    let health: api_dash::types::HealthStatus = client
        .request_as("/health", RequestOptions::default())
        .await
        .unwrap();
    assert_eq!(health.status, "healthy");
}
