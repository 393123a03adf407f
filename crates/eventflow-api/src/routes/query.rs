//! Natural-language query endpoint.

use axum::body::Bytes;
use axum::extract::State;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use eventflow_core::error::DomainError;
use eventflow_core::{aggregate, classifier};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /nlq.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// The free-text analytical question.
    pub question: Option<String>,
}

/// Response body carrying the analysis string.
#[derive(Debug, Serialize)]
pub struct QueryResponse {
    /// Deterministic summary answering the question.
    pub answer: String,
}

/// POST /nlq
///
/// Fetches the full record set, classifies the question, and runs the
/// matching aggregation. Rule-based on purpose; no model call.
#[instrument(skip(state, body))]
async fn answer_question(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<QueryResponse>, ApiError> {
    let request: QueryRequest = serde_json::from_slice(&body)
        .map_err(|_| DomainError::Validation("invalid JSON body".to_string()))?;
    let question = request.question.unwrap_or_default();
    let question = question.trim();
    if question.is_empty() {
        return Err(DomainError::Validation("no question provided".to_string()).into());
    }

    let records = state.store.list_all().await?;
    let intent = classifier::classify(question);
    let answer = aggregate::aggregate(&records, intent);

    info!(?intent, total = records.len(), "answered analytical question");
    Ok(Json(QueryResponse { answer }))
}

/// Returns the query router.
pub fn router() -> Router<AppState> {
    Router::new().route("/nlq", post(answer_question))
}
