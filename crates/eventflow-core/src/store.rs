//! Record store abstraction.

use async_trait::async_trait;

use crate::document::Document;
use crate::error::DomainError;

/// Port for the external document collection.
///
/// Implementations must not impose a schema: heterogeneous or oddly shaped
/// documents are stored and returned as-is. Failures surface as
/// [`DomainError::Store`] and are never retried here.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Durably append one document to the collection.
    async fn insert(&self, doc: Document) -> Result<(), DomainError>;

    /// Return every stored document, in storage order. Surrogate
    /// identifiers added by the backing store are not included.
    async fn list_all(&self) -> Result<Vec<Document>, DomainError>;
}
