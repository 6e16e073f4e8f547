//! User registry configuration.

use std::env;

use domain::{APP_ENV_VAR, ENV_DEVELOPMENT, ENV_PRODUCTION, USERS_STORAGE_KEY};

/// Deployment environment, which decides the repository implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// In-memory repository
    Development,
    /// Repository persisted through the key-value store
    #[default]
    Production,
}

impl Environment {
    /// Parse the raw `APP_ENV` value. Only the exact value `development`
    /// selects development; everything else, including unset, is production.
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some(ENV_DEVELOPMENT) => Environment::Development,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => ENV_DEVELOPMENT,
            Environment::Production => ENV_PRODUCTION,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User registry configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Selected environment
    pub environment: Environment,
    /// Optional key-value backend URL (`redis://...` with the `cache` feature)
    pub storage_url: Option<String>,
    /// Key the persisted collection is stored under
    pub storage_key: String,
}

impl RegistryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: Environment::from_value(lookup(APP_ENV_VAR).as_deref()),
            storage_url: lookup("STORAGE_URL").filter(|url| !url.trim().is_empty()),
            storage_key: lookup("USERS_STORAGE_KEY")
                .filter(|key| !key.trim().is_empty())
                .unwrap_or_else(|| USERS_STORAGE_KEY.to_string()),
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            storage_url: None,
            storage_key: USERS_STORAGE_KEY.to_string(),
        }
    }
}
