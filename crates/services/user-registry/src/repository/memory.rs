//! In-memory user repository.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{User, UserId};

use super::UserRepository;

/// Mutable user collection owned by whoever constructs the repository
pub type SharedUsers = Arc<RwLock<Vec<User>>>;

/// Wrap a collection so it can be handed to an [`InMemoryUserStore`]
pub fn shared_users(users: Vec<User>) -> SharedUsers {
    Arc::new(RwLock::new(users))
}

/// Repository over an injected in-process collection. Never fails.
#[derive(Debug, Clone)]
pub struct InMemoryUserStore {
    users: SharedUsers,
}

impl InMemoryUserStore {
    /// Create a repository over an existing shared collection
    pub fn new(users: SharedUsers) -> Self {
        Self { users }
    }

    /// Create a repository that owns a fresh copy of `users`
    pub fn seeded(users: Vec<User>) -> Self {
        Self::new(shared_users(users))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn update(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().await;
        match users.iter().position(|u| u.id == user.id) {
            Some(index) => users[index] = user,
            None => tracing::debug!(id = user.id, "Update skipped, user not present"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::seed_users;

    #[tokio::test]
    async fn test_find_by_id() {
        let repo = InMemoryUserStore::seeded(seed_users());

        let user = repo.find_by_id(2).await.unwrap().unwrap();
        assert_eq!(user, User::new(2, "User 2"));
        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_mutates_injected_collection() {
        let users = shared_users(seed_users());
        let repo = InMemoryUserStore::new(users.clone());

        repo.update(User::new(1, "Changed")).await.unwrap();

        let snapshot = users.read().await;
        assert_eq!(snapshot[0], User::new(1, "Changed"));
        assert_eq!(snapshot[1], User::new(2, "User 2"));
    }

    #[tokio::test]
    async fn test_update_absent_does_not_insert() {
        let repo = InMemoryUserStore::seeded(seed_users());
        repo.update(User::new(3, "Ghost")).await.unwrap();
        assert_eq!(repo.find_all().await.unwrap(), seed_users());
    }

    #[tokio::test]
    async fn test_instances_are_isolated() {
        let first = InMemoryUserStore::seeded(seed_users());
        let second = InMemoryUserStore::seeded(seed_users());

        first.update(User::new(1, "Changed")).await.unwrap();

        let untouched = second.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(untouched.name, "User 1");
    }
}
