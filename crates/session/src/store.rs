//! Session slot trait and implementations.

use std::path::PathBuf;

use async_trait::async_trait;
use entities::User;
use tokio::sync::RwLock;

use crate::{SessionError, SessionResult};

/// Trait for the single persisted session slot.
///
/// One slot, one serialized user: read at startup, written on login, cleared
/// on logout.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Reads the persisted user, if any.
    async fn load(&self) -> SessionResult<Option<User>>;

    /// Persists the given user, replacing any previous value.
    async fn save(&self, user: &User) -> SessionResult<()>;

    /// Clears the slot.
    async fn clear(&self) -> SessionResult<()>;
}

/// File-backed session slot holding one JSON-serialized user.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Creates a store backed by the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the standard per-user configuration location.
    pub fn at_default_location() -> SessionResult<Self> {
        let base = dirs::config_dir().ok_or(SessionError::NoStorageLocation)?;
        Ok(Self::new(base.join("course-sphere").join("session.json")))
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> SessionResult<Option<User>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, user: &User) -> SessionResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(user)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }

    async fn clear(&self) -> SessionResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory session slot for tests.
#[derive(Default)]
pub struct MemorySessionStore {
    slot: RwLock<Option<User>>,
}

impl MemorySessionStore {
    /// Creates an empty in-memory slot.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> SessionResult<Option<User>> {
        Ok(self.slot.read().await.clone())
    }

    async fn save(&self, user: &User) -> SessionResult<()> {
        *self.slot.write().await = Some(user.clone());
        Ok(())
    }

    async fn clear(&self) -> SessionResult<()> {
        *self.slot.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 10,
            name: "Maria".to_string(),
            email: "maria@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("nested").join("session.json"));

        assert!(store.load().await.unwrap().is_none());

        store.save(&user()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(user()));

        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::new(dir.path().join("session.json"));
        store.clear().await.unwrap();
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemorySessionStore::new();
        store.save(&user()).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(user()));
        store.clear().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }
}
