//! Unified error handling for the repository and storage layers.
//!
//! Every failure is a tagged value built at the failure site and carried
//! back through `AppResult`. Nothing in the workspace panics on a domain
//! failure.

use domain::UserId;
use thiserror::Error;

/// Application error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    // Repository errors
    #[error("User {0} not found")]
    RepositoryNotFound(UserId),

    // Storage errors
    #[error("Failed to parse stored value: {0}")]
    StorageParseFailure(String),

    #[error("Failed to write stored value: {0}")]
    StorageWriteFailure(String),

    #[error("Storage key not found: {0}")]
    StorageKeyNotFound(String),

    #[error("Failed to remove stored value: {0}")]
    StorageRemoveFailure(String),

    // Internal
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Stable discriminant tag for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            AppError::RepositoryNotFound(_) => "REPOSITORY_NOT_FOUND",
            AppError::StorageParseFailure(_) => "STORAGE_PARSE_FAILURE",
            AppError::StorageWriteFailure(_) => "STORAGE_WRITE_FAILURE",
            AppError::StorageKeyNotFound(_) => "STORAGE_KEY_NOT_FOUND",
            AppError::StorageRemoveFailure(_) => "STORAGE_REMOVE_FAILURE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether the error came out of the key-value layer
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            AppError::StorageParseFailure(_)
                | AppError::StorageWriteFailure(_)
                | AppError::StorageKeyNotFound(_)
                | AppError::StorageRemoveFailure(_)
        )
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, id: UserId) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, id: UserId) -> AppResult<T> {
        self.ok_or(AppError::RepositoryNotFound(id))
    }
}

/// Convenience constructors
impl AppError {
    pub fn parse(msg: impl Into<String>) -> Self {
        AppError::StorageParseFailure(msg.into())
    }

    pub fn write(msg: impl Into<String>) -> Self {
        AppError::StorageWriteFailure(msg.into())
    }

    pub fn key_not_found(key: impl Into<String>) -> Self {
        AppError::StorageKeyNotFound(key.into())
    }

    pub fn remove(msg: impl Into<String>) -> Self {
        AppError::StorageRemoveFailure(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            AppError::RepositoryNotFound(1),
            AppError::parse("x"),
            AppError::write("x"),
            AppError::key_not_found("x"),
            AppError::remove("x"),
            AppError::internal("x"),
        ];
        let mut codes: Vec<_> = errors.iter().map(AppError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_messages() {
        assert_eq!(AppError::RepositoryNotFound(3).to_string(), "User 3 not found");
        assert_eq!(
            AppError::key_not_found("users").to_string(),
            "Storage key not found: users"
        );
    }

    #[test]
    fn test_is_storage() {
        assert!(AppError::remove("gone").is_storage());
        assert!(!AppError::RepositoryNotFound(1).is_storage());
        assert!(!AppError::internal("boom").is_storage());
    }

    #[test]
    fn test_ok_or_not_found() {
        let missing: Option<u8> = None;
        assert_eq!(missing.ok_or_not_found(9), Err(AppError::RepositoryNotFound(9)));
        assert_eq!(Some(4).ok_or_not_found(9), Ok(4));
    }
}
