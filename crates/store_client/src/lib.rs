//! HTTP gateway to the CourseSphere data store.
//!
//! This crate wraps every remote call the client makes: the JSON data store
//! holding users, courses, and lessons, and the external random-identity
//! service used for instructor suggestions. Transport failures, rejection
//! statuses, and malformed bodies all normalize into [`StoreError`]; nothing
//! is retried.

mod client;
mod config;
mod error;
mod suggestion;

pub use client::*;
pub use config::*;
pub use error::*;
