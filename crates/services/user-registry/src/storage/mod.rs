//! Key-value storage layer.
//!
//! `KeyValueStore` is the raw string contract every backend implements.
//! `JsonStorage` sits on top of it and handles (de)serialization, mapping
//! each failure onto the matching storage error kind.

mod json;
mod memory;
#[cfg(feature = "cache")]
mod redis;

use async_trait::async_trait;
use std::sync::Arc;

use common::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

pub use json::JsonStorage;
pub use memory::MemoryStore;
#[cfg(feature = "cache")]
pub use self::redis::RedisStore;

/// String-keyed storage backend.
///
/// Reads of an unset key return `Ok(None)`; only backend failures are errors.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: String) -> AppResult<()>;

    /// Delete `key`; deleting an unset key succeeds
    async fn remove(&self, key: &str) -> AppResult<()>;
}

#[async_trait]
impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key).await
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        (**self).set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key).await
    }
}
