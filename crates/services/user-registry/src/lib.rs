//! User Registry Library
//!
//! A user service whose repository is chosen at startup: an in-memory
//! collection in development, a collection persisted through a key-value
//! store everywhere else.
//!
//! # Layers
//!
//! - **storage**: key-value backends and the typed JSON layer over them
//! - **repository**: the `UserRepository` contract and its implementations
//! - **service**: user use cases and the service container
//! - **workflow**: the demo run driven by the binary

pub mod cli;
pub mod config;
pub mod repository;
pub mod service;
pub mod storage;
pub mod workflow;

use std::io::Write;

use common::AppResult;

pub use config::{Environment, RegistryConfig};
pub use service::{ServiceContainer, Services};
pub use workflow::{run_demo, DemoReport};

/// Bind the configured implementation, run the demo and write its report.
pub async fn run<W: Write>(config: &RegistryConfig, out: &mut W) -> AppResult<()> {
    let services = Services::from_config(config).await?;
    let report = run_demo(&services).await?;
    report.write_to(out)
}
