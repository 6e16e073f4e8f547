//! Common utilities shared across the workspace.
//!
//! This crate provides the error taxonomy used by the storage,
//! repository and service layers.

pub mod error;

pub use error::{AppError, AppResult, OptionExt};
