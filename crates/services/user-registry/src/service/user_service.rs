//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::{User, UserId};

use crate::repository::UserRepository;

/// User service trait for dependency injection.
///
/// `get_user` is the strict lookup (unknown id is `RepositoryNotFound`);
/// `find_user` passes the repository's permissive answer through.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID, failing if it does not exist
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// Find user by ID
    async fn find_user(&self, id: UserId) -> AppResult<Option<User>>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Replace the stored user with the same ID; no-op if absent
    async fn update_user(&self, user: User) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found(id)
    }

    async fn find_user(&self, id: UserId) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn update_user(&self, user: User) -> AppResult<()> {
        tracing::debug!(id = user.id, "Updating user");
        self.repo.update(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use common::AppError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_get_user_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(User::new(id, "User 1"))));

        let service = UserManager::new(Arc::new(repo));
        let user = service.get_user(1).await.unwrap();

        assert_eq!(user.id, 1);
    }

    #[tokio::test]
    async fn test_get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(42).await;

        assert_eq!(result.unwrap_err(), AppError::RepositoryNotFound(42));
    }

    #[tokio::test]
    async fn test_find_user_absent_is_none() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.find_user(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_repository_error_propagates() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .returning(|| Err(AppError::internal("boom")));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.list_users().await.is_err());
    }

    #[tokio::test]
    async fn test_list_users_success() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_all()
            .returning(|| Ok(vec![User::new(1, "User 1"), User::new(2, "User 2")]));

        let service = UserManager::new(Arc::new(repo));
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_update_user_delegates() {
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .with(eq(User::new(1, "Changed")))
            .times(1)
            .returning(|_| Ok(()));

        let service = UserManager::new(Arc::new(repo));
        assert!(service.update_user(User::new(1, "Changed")).await.is_ok());
    }
}
