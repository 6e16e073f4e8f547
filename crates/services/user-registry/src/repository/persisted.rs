//! User repository persisted through a key-value store.
//!
//! The whole collection lives as one JSON array under a single key. Every
//! operation reads it, optionally transforms it in memory and writes it back.
//! There is no incremental indexing and no transactional guarantee.

use async_trait::async_trait;

use common::AppResult;
use domain::{User, UserId, USERS_STORAGE_KEY};

use super::UserRepository;
use crate::storage::{JsonStorage, KeyValueStore};

/// Repository backed by a [`KeyValueStore`].
///
/// Read failures are logged and treated as an empty collection. Write
/// failures during `update` are logged and swallowed.
#[derive(Debug)]
pub struct PersistedUserStore<S> {
    storage: JsonStorage<S>,
    key: String,
}

impl<S: KeyValueStore> PersistedUserStore<S> {
    /// Create a repository using the default `users` key
    pub fn new(store: S) -> Self {
        Self::with_key(store, USERS_STORAGE_KEY)
    }

    /// Create a repository storing its collection under `key`
    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            storage: JsonStorage::new(store),
            key: key.into(),
        }
    }

    /// Key the collection is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Write `users` as the initial collection unless one is already stored.
    ///
    /// Returns `true` when the seed was written. Unlike `update`, a failed
    /// write is returned to the caller.
    pub async fn seed_if_empty(&self, users: &[User]) -> AppResult<bool> {
        match self.storage.get_item::<Vec<User>>(&self.key).await {
            Ok(Some(_)) => return Ok(false),
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(key = %self.key, code = e.code(), "Replacing unreadable collection: {}", e);
            }
        }

        self.storage.set_item(&self.key, users).await?;
        tracing::debug!(key = %self.key, count = users.len(), "Seeded user collection");
        Ok(true)
    }

    async fn load(&self) -> Vec<User> {
        match self.storage.get_item(&self.key).await {
            Ok(Some(users)) => users,
            Ok(None) => {
                tracing::debug!(key = %self.key, "No stored collection, treating as empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!(key = %self.key, code = e.code(), "Read failed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl<S: KeyValueStore> UserRepository for PersistedUserStore<S> {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.load().await.into_iter().find(|u| u.id == id))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.load().await)
    }

    async fn update(&self, user: User) -> AppResult<()> {
        let mut users = self.load().await;

        let Some(index) = users.iter().position(|u| u.id == user.id) else {
            tracing::debug!(id = user.id, "Update skipped, user not present");
            return Ok(());
        };
        users[index] = user;

        if let Err(e) = self.storage.set_item(&self.key, &users).await {
            tracing::warn!(key = %self.key, code = e.code(), "Write failed, update dropped: {}", e);
        }
        Ok(())
    }
}
