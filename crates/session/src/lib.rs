//! Session and identity handling for CourseSphere.
//!
//! Holds the currently authenticated user for the lifetime of the process,
//! restores it from a persisted slot at startup, and owns the login/logout
//! transitions. The persisted blob is the serialized user without its
//! credential; restore trusts the blob and does not re-validate against the
//! store.

mod error;
mod session;
mod store;

pub use error::*;
pub use session::*;
pub use store::*;
