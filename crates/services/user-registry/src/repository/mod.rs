//! Repository layer for user data access.
//!
//! One contract, two interchangeable implementations: an in-process
//! collection and a collection persisted through a key-value store.

mod memory;
mod persisted;
mod user_repository;

pub use memory::{shared_users, InMemoryUserStore, SharedUsers};
pub use persisted::PersistedUserStore;
pub use user_repository::UserRepository;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
