//! Course state error types.

use store_client::StoreError;
use thiserror::Error;

/// Errors that can occur while working with cached course state.
#[derive(Debug, Error)]
pub enum CourseStateError {
    /// The authorization gate rejected the action.
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// A local field-level check failed before any network call.
    #[error("{0}")]
    Validation(String),

    /// The referenced lesson is not in the cached collection.
    #[error("Lesson {0} not found in this course")]
    LessonNotFound(u64),

    /// A remote call failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for course state operations.
pub type CourseStateResult<T> = Result<T, CourseStateError>;
