//! Route modules, one per boundary operation.

use axum::{Router, middleware};

use crate::auth;
use crate::state::AppState;

pub mod health;
pub mod ingest;
pub mod query;
pub mod records;

/// Assembles the full application router. `/data` and `/nlq` sit behind the
/// bearer-credential middleware; `/health` and `/ingest` are open.
pub fn app_router(state: AppState) -> Router {
    let protected = Router::new()
        .merge(records::router())
        .merge(query::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_bearer,
        ));

    Router::new()
        .merge(health::router())
        .merge(ingest::router())
        .merge(protected)
        .with_state(state)
}
