//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
///
/// Each variant corresponds to one boundary outcome: `Auth` is always a 401
/// with an opaque body, `Validation` a 400 echoing the reason, `Store` and
/// `Internal` a 500.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The caller's credential is missing, malformed, invalid, or expired.
    /// The message never reveals which sub-case applied.
    #[error("invalid or missing credential")]
    Auth,

    /// The request payload is unusable.
    #[error("{0}")]
    Validation(String),

    /// The backing record store could not be reached or failed an operation.
    #[error("store error: {0}")]
    Store(String),

    /// Any unanticipated failure while answering a query.
    #[error("an error occurred: {0}")]
    Internal(String),
}
