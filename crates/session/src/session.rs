//! The process-wide session holder.

use std::sync::Arc;

use entities::User;
use store_client::StoreClient;
use tracing::{debug, info};

use crate::{SessionError, SessionResult, SessionStore};

/// The current-user session.
///
/// Created once at process root and passed to whatever needs identity. Starts
/// anonymous; [`Session::restore`] promotes it from the persisted slot,
/// [`Session::login`] authenticates against the store, [`Session::logout`]
/// returns it to anonymous.
pub struct Session {
    store: Arc<dyn SessionStore>,
    current: Option<User>,
}

impl Session {
    /// Creates an anonymous session over the given slot.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            current: None,
        }
    }

    /// Restores the persisted user, if any.
    ///
    /// The blob is trusted as-is; no re-validation against the store happens
    /// here. Returns whether the session is now authenticated.
    pub async fn restore(&mut self) -> SessionResult<bool> {
        self.current = self.store.load().await?;
        if let Some(user) = &self.current {
            debug!(user_id = user.id, "Restored persisted session");
        }
        Ok(self.current.is_some())
    }

    /// Authenticates against the store and persists the resulting user.
    ///
    /// The credential is compared as the opaque value the store holds and is
    /// stripped before the user is kept or persisted.
    pub async fn login(
        &mut self,
        client: &StoreClient,
        email: &str,
        password: &str,
    ) -> SessionResult<User> {
        let records = client.find_users_by_email(email).await?;
        let record = records.into_iter().next().ok_or(SessionError::UserNotFound)?;

        if record.password.as_deref() != Some(password) {
            return Err(SessionError::InvalidCredentials);
        }

        let user = record.into_user();
        self.store.save(&user).await?;
        info!(user_id = user.id, "User logged in");
        self.current = Some(user.clone());
        Ok(user)
    }

    /// Clears the persisted slot and returns to anonymous.
    pub async fn logout(&mut self) -> SessionResult<()> {
        self.store.clear().await?;
        if let Some(user) = self.current.take() {
            info!(user_id = user.id, "User logged out");
        }
        Ok(())
    }

    /// The authenticated user, if any.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    /// Whether the session is authenticated.
    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The authenticated user.
    ///
    /// Calling this on an anonymous session is a contract violation, not a
    /// recoverable condition, and panics.
    pub fn require_user(&self) -> &User {
        self.current
            .as_ref()
            .expect("Session must be authenticated before use")
    }
}
