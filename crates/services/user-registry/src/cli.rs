//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing. Implementation
//! selection stays in the environment (`APP_ENV`), not on the command line.

use clap::Parser;
use std::path::PathBuf;

/// User registry - runs the user lookup demo against the configured repository
#[derive(Parser, Debug)]
#[command(name = "user-registry")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Dotenv file to load instead of `.env`
    #[arg(long, value_name = "PATH", env = "REGISTRY_ENV_FILE")]
    pub env_file: Option<PathBuf>,
}
