//! Shared test mocks and utilities for the Eventflow service.

mod store;

pub use store::{FailingRecordStore, InMemoryRecordStore};
