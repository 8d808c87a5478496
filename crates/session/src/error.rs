//! Session error types.

use store_client::StoreError;
use thiserror::Error;

/// Errors that can occur during session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No user matched the supplied email.
    #[error("No user found with that email")]
    UserNotFound,

    /// The supplied password does not match the stored credential.
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// The store could not be queried.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The persisted session slot could not be read or written.
    #[error("Session persistence failed: {0}")]
    Persistence(#[from] std::io::Error),

    /// The persisted session blob is not a valid user record.
    #[error("Corrupt session data: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No usable location for the session slot.
    #[error("No configuration directory available for session storage")]
    NoStorageLocation,
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;
