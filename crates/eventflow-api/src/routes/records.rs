//! Bulk record retrieval endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use tracing::instrument;

use eventflow_core::document::Document;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /data — every stored record, in storage order. Authentication is
/// enforced by the middleware wrapped around this router.
#[instrument(skip(state))]
async fn list_records(State(state): State<AppState>) -> Result<Json<Vec<Document>>, ApiError> {
    let records = state.store.list_all().await?;
    Ok(Json(records))
}

/// Returns the record listing router.
pub fn router() -> Router<AppState> {
    Router::new().route("/data", get(list_records))
}
