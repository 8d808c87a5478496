//! Cached course state and the logic layered over it.
//!
//! The pieces a course detail screen needs to stay consistent with the
//! remote store: an entity cache holding the active course with its resolved
//! instructors and lessons, pure filtering/pagination over the lesson list,
//! the authorization gate deciding which actions a user may take, local form
//! validation, and the orchestrated multi-step mutations that end in a
//! wholesale cache refresh.

mod error;
mod forms;
mod mutations;
mod permissions;
mod view;
mod workspace;

pub use error::*;
pub use forms::*;
pub use mutations::*;
pub use permissions::*;
pub use view::*;
pub use workspace::*;
