//! Store gateway error types.

use thiserror::Error;

/// Errors that can occur while talking to the remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("Store unreachable: {0}")]
    Network(String),

    /// The store answered with a non-success status.
    #[error("Store rejected the request with status {status}")]
    Status {
        /// HTTP status code the store answered with.
        status: u16,
    },

    /// The response body did not match the expected record shape.
    #[error("Malformed store response: {0}")]
    Decode(String),
}

impl StoreError {
    /// Whether the store answered 404 for the requested record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::Status { status: 404 })
    }
}

/// Result type for store gateway operations.
pub type StoreResult<T> = Result<T, StoreError>;
