//! Eventflow Core — shared domain abstractions.
//!
//! This crate holds the pure service logic: the schemaless document type,
//! the error taxonomy, the record-store port, question classification, and
//! the aggregation engine. It contains no infrastructure code.

pub mod aggregate;
pub mod classifier;
pub mod document;
pub mod error;
pub mod store;
