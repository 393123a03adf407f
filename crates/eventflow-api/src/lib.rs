//! Eventflow API — HTTP boundary for the ingestion and query service.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
