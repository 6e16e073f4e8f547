//! Domain layer - Core entities shared by every crate in the workspace.
//!
//! Pure data with no infrastructure dependencies beyond serde.

pub mod constants;
pub mod user;

pub use constants::*;
pub use user::{seed_users, User, UserId};
