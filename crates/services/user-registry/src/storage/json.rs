//! Typed JSON access over a raw key-value backend.

use serde::{de::DeserializeOwned, Serialize};

use common::{AppError, AppResult};

use super::KeyValueStore;

/// JSON (de)serializing wrapper around a [`KeyValueStore`].
///
/// Backend failures are re-tagged by operation: reads surface as
/// `StorageParseFailure`, writes as `StorageWriteFailure`, removals as
/// `StorageRemoveFailure`.
#[derive(Debug, Clone)]
pub struct JsonStorage<S> {
    store: S,
}

impl<S: KeyValueStore> JsonStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read and deserialize `key`. An unset key is `Ok(None)`.
    pub async fn get_item<T: DeserializeOwned>(&self, key: &str) -> AppResult<Option<T>> {
        let raw = self
            .store
            .get(key)
            .await
            .map_err(|e| retag(e, AppError::StorageParseFailure))?;

        raw.map(|json| {
            serde_json::from_str(&json)
                .map_err(|e| AppError::parse(format!("value under '{}': {}", key, e)))
        })
        .transpose()
    }

    /// Like [`get_item`](Self::get_item) but an unset key is `StorageKeyNotFound`.
    pub async fn require_item<T: DeserializeOwned>(&self, key: &str) -> AppResult<T> {
        self.get_item(key)
            .await?
            .ok_or_else(|| AppError::key_not_found(key))
    }

    /// Serialize `value` and write it under `key`.
    pub async fn set_item<T>(&self, key: &str, value: &T) -> AppResult<()>
    where
        T: Serialize + Sync + ?Sized,
    {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::write(format!("value for '{}': {}", key, e)))?;

        self.store
            .set(key, json)
            .await
            .map_err(|e| retag(e, AppError::StorageWriteFailure))
    }

    /// Delete `key`.
    pub async fn remove_item(&self, key: &str) -> AppResult<()> {
        self.store
            .remove(key)
            .await
            .map_err(|e| retag(e, AppError::StorageRemoveFailure))
    }
}

/// Wrap a backend error in the kind expected for the current operation,
/// leaving errors that already carry a storage tag untouched.
fn retag(err: AppError, kind: fn(String) -> AppError) -> AppError {
    if err.is_storage() {
        err
    } else {
        kind(err.to_string())
    }
}
