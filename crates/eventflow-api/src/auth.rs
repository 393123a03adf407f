//! Authentication middleware for protected routes.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use eventflow_core::error::DomainError;

use crate::error::ApiError;
use crate::state::AppState;

/// Explicit credential check run before protected handler bodies. Rejected
/// requests return early with a uniform 401 and never reach the handler,
/// so the record store is untouched for unauthenticated callers.
pub async fn require_bearer(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    if let Err(rejection) = state.verifier.validate_header(header) {
        tracing::debug!(%rejection, "rejecting unauthenticated request");
        return Err(ApiError(DomainError::Auth));
    }

    Ok(next.run(request).await)
}
