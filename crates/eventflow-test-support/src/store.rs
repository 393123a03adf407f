//! Test stores — mock `RecordStore` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use eventflow_core::document::Document;
use eventflow_core::error::DomainError;
use eventflow_core::store::RecordStore;

/// A record store backed by an in-process `Vec`, preserving insertion
/// order. Useful for driving the full service without a live database.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<Vec<Document>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `records`.
    #[must_use]
    pub fn with_records(records: Vec<Document>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    /// Returns a snapshot of everything stored so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Document> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(&self, doc: Document) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(doc);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Document>, DomainError> {
        Ok(self.records.lock().unwrap().clone())
    }
}

/// A record store that always reports the collection as unreachable.
/// Useful for testing error-handling paths.
#[derive(Debug, Default)]
pub struct FailingRecordStore;

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn insert(&self, _doc: Document) -> Result<(), DomainError> {
        Err(DomainError::Store("connection refused".into()))
    }

    async fn list_all(&self) -> Result<Vec<Document>, DomainError> {
        Err(DomainError::Store("connection refused".into()))
    }
}
