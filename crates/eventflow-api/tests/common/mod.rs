//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use eventflow_api::routes;
use eventflow_api::state::AppState;
use eventflow_auth::TokenVerifier;
use eventflow_core::store::RecordStore;
use eventflow_test_support::InMemoryRecordStore;

/// Shared signing secret used across all integration tests.
pub const SECRET: &str = "integration-test-secret";

/// Build the full app router over the given store, with the same route
/// structure as `main.rs`.
pub fn build_test_app(store: Arc<dyn RecordStore>) -> Router {
    let verifier = Arc::new(TokenVerifier::new(SECRET));
    routes::app_router(AppState::new(store, verifier))
}

/// Build an app over a fresh in-memory store, returning both so tests can
/// inspect and seed the store directly.
pub fn in_memory_app() -> (Arc<InMemoryRecordStore>, Router) {
    let store = Arc::new(InMemoryRecordStore::new());
    let app = build_test_app(store.clone());
    (store, app)
}

/// A valid `Authorization` header value for the test secret.
pub fn valid_bearer() -> String {
    let token = eventflow_auth::mint_token(SECRET, chrono::Duration::minutes(5)).unwrap();
    format!("Bearer {token}")
}

/// An `Authorization` header value whose token expired in the past.
pub fn expired_bearer() -> String {
    let token = eventflow_auth::mint_token(SECRET, chrono::Duration::minutes(-5)).unwrap();
    format!("Bearer {token}")
}

/// Send a GET request, optionally authenticated, and return the response.
pub async fn get_json(
    app: Router,
    uri: &str,
    auth: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = builder.body(Body::empty()).unwrap();

    send(app, request).await
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
    auth: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    post_raw(app, uri, &serde_json::to_string(body).unwrap(), auth).await
}

/// Send a POST request with an arbitrary raw body, for exercising malformed
/// payloads.
pub async fn post_raw(
    app: Router,
    uri: &str,
    body: &str,
    auth: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(auth) = auth {
        builder = builder.header(header::AUTHORIZATION, auth);
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();

    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
