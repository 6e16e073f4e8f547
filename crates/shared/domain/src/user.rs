//! User domain entity.

use serde::{Deserialize, Serialize};

use crate::constants::SEED_USERS;

/// Unique user identifier
pub type UserId = u64;

/// User domain entity
///
/// Identity is the `id`; two records with the same id describe the same user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
}

impl User {
    /// Create a new user
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {}", self.id, self.name)
    }
}

/// Build the demo seed collection in insertion order
pub fn seed_users() -> Vec<User> {
    SEED_USERS
        .iter()
        .map(|(id, name)| User::new(*id, *name))
        .collect()
}
