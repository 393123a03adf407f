//! Integration tests for the record listing endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use eventflow_test_support::{FailingRecordStore, InMemoryRecordStore};
use serde_json::json;

fn seeded_app() -> (Arc<InMemoryRecordStore>, axum::Router) {
    let records = vec![
        json!({"event_type": "sale", "product_id": "A"}),
        json!({"event_type": "view"}),
    ]
    .into_iter()
    .map(|v| v.as_object().unwrap().clone())
    .collect();
    let store = Arc::new(InMemoryRecordStore::with_records(records));
    let app = common::build_test_app(store.clone());
    (store, app)
}

#[tokio::test]
async fn test_list_returns_all_records_when_authenticated() {
    let (_, app) = seeded_app();

    let (status, json) = common::get_json(app, "/data", Some(&common::valid_bearer())).await;

    assert_eq!(status, StatusCode::OK);
    let records = json.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["event_type"], "sale");
}

#[tokio::test]
async fn test_list_twice_without_ingest_is_identical() {
    let (_, app) = seeded_app();
    let auth = common::valid_bearer();

    let (_, first) = common::get_json(app.clone(), "/data", Some(&auth)).await;
    let (_, second) = common::get_json(app, "/data", Some(&auth)).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_list_without_credential_returns_401_and_never_touches_store() {
    // A failing store would turn any read into a 500, so a 401 here proves
    // the request was rejected before the store was consulted.
    let app = common::build_test_app(Arc::new(FailingRecordStore));

    let (status, json) = common::get_json(app, "/data", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"], "invalid or missing credential");
}

#[tokio::test]
async fn test_list_with_malformed_header_returns_401() {
    let app = common::build_test_app(Arc::new(FailingRecordStore));

    let (status, _) = common::get_json(app, "/data", Some("Bearer")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_list_with_expired_token_returns_401() {
    let app = common::build_test_app(Arc::new(FailingRecordStore));

    let (status, json) =
        common::get_json(app, "/data", Some(&common::expired_bearer())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    // Same opaque body as the missing-credential case.
    assert_eq!(json["error"], "invalid or missing credential");
}

#[tokio::test]
async fn test_list_returns_500_when_store_fails() {
    let app = common::build_test_app(Arc::new(FailingRecordStore));

    let (status, json) =
        common::get_json(app, "/data", Some(&common::valid_bearer())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "store error: connection refused");
}
