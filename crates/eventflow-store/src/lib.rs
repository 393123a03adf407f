//! Eventflow Store — PostgreSQL-backed record persistence.

pub mod pg_record_store;
pub mod schema;
