//! Core entity definitions for CourseSphere.
//!
//! This crate defines the typed record shapes the remote data store exchanges
//! with the client: users, courses, and lessons. Every shape is validated at
//! the gateway boundary through serde, so malformed store responses fail fast
//! instead of propagating missing fields.

mod course;
mod id;
mod lesson;
mod user;

pub use course::*;
pub use lesson::*;
pub use user::*;
