//! Shared application state.

use std::sync::Arc;

use eventflow_auth::TokenVerifier;
use eventflow_core::store::RecordStore;

/// Application state shared across all request handlers. Built once at
/// startup and injected; handlers hold no other shared mutable state.
#[derive(Clone)]
pub struct AppState {
    /// The record store the service reads and writes.
    pub store: Arc<dyn RecordStore>,
    /// Bearer credential verifier for protected routes.
    pub verifier: Arc<TokenVerifier>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>, verifier: Arc<TokenVerifier>) -> Self {
        Self { store, verifier }
    }
}
