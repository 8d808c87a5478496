//! Subcommand implementations.

use anyhow::Context;
use entities::User;
use session::Session;
use store_client::StoreClient;

pub mod auth;
pub mod courses;
pub mod instructors;
pub mod lessons;

/// Shared state every subcommand works against.
pub struct AppContext {
    /// Gateway to the remote store.
    pub client: StoreClient,
    /// The restored (or anonymous) session.
    pub session: Session,
}

impl AppContext {
    /// The logged-in user, as a readable error instead of a panic when the
    /// session is anonymous.
    pub fn current_user(&self) -> anyhow::Result<&User> {
        self.session
            .current_user()
            .context("Not logged in; run `course-sphere login` first")
    }
}
