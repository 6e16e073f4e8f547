//! Domain-level constants.
//!
//! Storage keys, environment names and the demo seed live here so the
//! repositories and the composition root agree on them.

use crate::UserId;

// =============================================================================
// Storage
// =============================================================================

/// Key under which the persisted repository keeps the whole user collection
pub const USERS_STORAGE_KEY: &str = "users";

// =============================================================================
// Environment
// =============================================================================

/// Environment variable that selects the repository implementation
pub const APP_ENV_VAR: &str = "APP_ENV";

/// Value of `APP_ENV` that selects the in-memory repository
pub const ENV_DEVELOPMENT: &str = "development";

/// Name reported for every other environment
pub const ENV_PRODUCTION: &str = "production";

// =============================================================================
// Demo seed
// =============================================================================

/// Users every repository starts with: `(id, name)`
pub const SEED_USERS: &[(UserId, &str)] = &[(1, "User 1"), (2, "User 2")];

/// Ids the demo workflow looks up, in order
pub const DEMO_LOOKUP_IDS: [UserId; 2] = [1, 2];
