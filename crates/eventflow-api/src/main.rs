//! Eventflow API server entry point.

use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use eventflow_api::config::Config;
use eventflow_api::routes;
use eventflow_api::state::AppState;
use eventflow_auth::TokenVerifier;
use eventflow_store::pg_record_store::PgRecordStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Eventflow API server");

    let config = Config::from_env()?;

    // Create database connection pool and make sure the records table
    // exists before serving traffic.
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await?;
    let store = PgRecordStore::new(pool);
    store.ensure_schema().await?;

    let verifier = TokenVerifier::new(&config.jwt_secret);
    let app_state = AppState::new(Arc::new(store), Arc::new(verifier));

    // TODO: Replace CorsLayer::permissive() with restricted origins for production.
    let app = routes::app_router(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .map_err(|e| format!("invalid HOST:PORT combination: {e}"))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
