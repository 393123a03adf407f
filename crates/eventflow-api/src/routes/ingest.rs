//! Record ingestion endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use eventflow_core::error::DomainError;

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for a successful ingest.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    /// Always `"success"`.
    pub status: &'static str,
}

/// POST /ingest
///
/// Accepts any JSON object and appends it to the record store. The body is
/// parsed by hand so that malformed text and non-object values are always a
/// 400 with a JSON error body, regardless of content type.
#[instrument(skip(state, body))]
async fn ingest(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<IngestResponse>), ApiError> {
    let value: Value = serde_json::from_slice(&body)
        .map_err(|_| DomainError::Validation("invalid JSON body".to_string()))?;
    let Value::Object(doc) = value else {
        return Err(
            DomainError::Validation("request body must be a JSON object".to_string()).into(),
        );
    };

    state.store.insert(doc).await?;

    info!("record ingested");
    Ok((StatusCode::CREATED, Json(IngestResponse { status: "success" })))
}

/// Returns the ingestion router.
pub fn router() -> Router<AppState> {
    Router::new().route("/ingest", post(ingest))
}
