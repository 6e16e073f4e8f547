//! Service Container - Binds service traits to concrete implementations.
//!
//! SOLID (DIP): Callers depend on `ServiceContainer`, not on which
//! repository ended up behind the user service.

use std::sync::Arc;

use common::AppResult;
use domain::seed_users;

use super::{UserManager, UserService};
use crate::config::{Environment, RegistryConfig};
use crate::repository::{InMemoryUserStore, PersistedUserStore, UserRepository};
use crate::storage::{KeyValueStore, MemoryStore};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
}

impl Services {
    /// Create a service container from an already built user service
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create a service container around a repository
    pub fn with_repository(repo: Arc<dyn UserRepository>) -> Self {
        Self::new(Arc::new(UserManager::new(repo)))
    }

    /// Build the container for the configured environment.
    ///
    /// Only production opens the configured key-value backend; development
    /// never touches it.
    pub async fn from_config(config: &RegistryConfig) -> AppResult<Self> {
        let store: Arc<dyn KeyValueStore> = match config.environment {
            Environment::Development => Arc::new(MemoryStore::new()),
            Environment::Production => open_store(config).await?,
        };
        Self::from_config_with_store(config, store).await
    }

    /// Build the container over an already opened key-value backend.
    ///
    /// Development binds the in-memory repository and leaves `store` alone.
    /// Every other environment binds the persisted repository over `store`,
    /// seeding it if it is empty.
    pub async fn from_config_with_store(
        config: &RegistryConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> AppResult<Self> {
        let repo: Arc<dyn UserRepository> = match config.environment {
            Environment::Development => {
                tracing::info!(environment = %config.environment, "Binding in-memory user repository");
                Arc::new(InMemoryUserStore::seeded(seed_users()))
            }
            Environment::Production => {
                let repo = PersistedUserStore::with_key(store, config.storage_key.clone());
                tracing::info!(
                    environment = %config.environment,
                    key = repo.key(),
                    "Binding persisted user repository"
                );
                if repo.seed_if_empty(&seed_users()).await? {
                    tracing::info!(key = repo.key(), "Seeded empty user store");
                }
                Arc::new(repo)
            }
        };

        Ok(Self::with_repository(repo))
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }
}

#[cfg(feature = "cache")]
async fn open_store(config: &RegistryConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    use crate::storage::RedisStore;

    match config.storage_url.as_deref() {
        Some(url) if url.starts_with("redis://") || url.starts_with("rediss://") => {
            Ok(Arc::new(RedisStore::connect(url).await?))
        }
        Some(url) => {
            tracing::warn!(url = %url, "Unsupported storage URL, using in-process storage");
            Ok(Arc::new(MemoryStore::new()))
        }
        None => Ok(Arc::new(MemoryStore::new())),
    }
}

#[cfg(not(feature = "cache"))]
async fn open_store(config: &RegistryConfig) -> AppResult<Arc<dyn KeyValueStore>> {
    if config.storage_url.is_some() {
        tracing::warn!("STORAGE_URL is set but the `cache` feature is disabled, using in-process storage");
    }
    Ok(Arc::new(MemoryStore::new()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::User;

    fn config_for(environment: Environment) -> RegistryConfig {
        RegistryConfig {
            environment,
            ..RegistryConfig::default()
        }
    }

    #[tokio::test]
    async fn test_development_binds_seeded_memory() {
        let services = Services::from_config(&config_for(Environment::Development))
            .await
            .unwrap();

        let users = services.users().list_users().await.unwrap();
        assert_eq!(users, seed_users());
    }

    #[tokio::test]
    async fn test_production_binds_seeded_persisted() {
        let services = Services::from_config(&config_for(Environment::Production))
            .await
            .unwrap();

        let user = services.users().get_user(2).await.unwrap();
        assert_eq!(user, User::new(2, "User 2"));
    }

    #[tokio::test]
    async fn test_production_persists_to_injected_store() {
        let store = Arc::new(MemoryStore::new());
        let services =
            Services::from_config_with_store(&config_for(Environment::Production), store.clone())
                .await
                .unwrap();

        let raw = store.get("users").await.unwrap();
        assert_eq!(
            raw.as_deref(),
            Some(r#"[{"id":1,"name":"User 1"},{"id":2,"name":"User 2"}]"#)
        );

        services.users().update_user(User::new(2, "Stored")).await.unwrap();

        let raw = store.get("users").await.unwrap();
        assert_eq!(
            raw.as_deref(),
            Some(r#"[{"id":1,"name":"User 1"},{"id":2,"name":"Stored"}]"#)
        );
    }

    #[tokio::test]
    async fn test_production_uses_configured_key() {
        let store = Arc::new(MemoryStore::new());
        let config = RegistryConfig {
            storage_key: "people".to_string(),
            ..config_for(Environment::Production)
        };
        Services::from_config_with_store(&config, store.clone())
            .await
            .unwrap();

        assert!(store.get("people").await.unwrap().is_some());
        assert!(store.get("users").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_development_leaves_injected_store_empty() {
        let store = Arc::new(MemoryStore::new());
        let services =
            Services::from_config_with_store(&config_for(Environment::Development), store.clone())
                .await
                .unwrap();

        services.users().update_user(User::new(1, "Changed")).await.unwrap();

        assert_eq!(services.users().get_user(1).await.unwrap().name, "Changed");
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_containers_do_not_share_state() {
        let first = Services::from_config(&config_for(Environment::Development))
            .await
            .unwrap();
        let second = Services::from_config(&config_for(Environment::Development))
            .await
            .unwrap();

        first.users().update_user(User::new(1, "Changed")).await.unwrap();

        let user = second.users().get_user(1).await.unwrap();
        assert_eq!(user.name, "User 1");
    }

    #[tokio::test]
    async fn test_with_repository() {
        let repo = Arc::new(InMemoryUserStore::seeded(vec![User::new(5, "Five")]));
        let services = Services::with_repository(repo);

        assert_eq!(services.users().get_user(5).await.unwrap().name, "Five");
    }
}
