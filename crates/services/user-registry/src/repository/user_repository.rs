//! User repository contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Lookups are permissive: an unknown id is `Ok(None)`, never an error.
/// `update` replaces the record with the same id and never inserts.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// List all users in insertion order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Replace the stored record matching `user.id`; no-op if absent
    async fn update(&self, user: User) -> AppResult<()>;
}
