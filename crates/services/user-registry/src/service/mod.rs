//! Application services layer - Use cases over the repository.
//!
//! Services depend on the `UserRepository` trait, never on a concrete
//! implementation; the container decides which one is bound.

pub mod container;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
