//! User Registry - Application entry point.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_registry::{cli::Cli, RegistryConfig};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load environment variables before the log filter reads RUST_LOG
    let env_loaded = match &cli.env_file {
        Some(path) => dotenvy::from_path(path).map_err(|e| (path.display().to_string(), e)),
        None => {
            dotenvy::dotenv().ok();
            Ok(())
        }
    };

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    if let Err((path, e)) = env_loaded {
        tracing::error!("Failed to load env file {}: {}", path, e);
        std::process::exit(1);
    }

    // Load configuration
    let config = RegistryConfig::from_env();
    tracing::debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let result = user_registry::run(&config, &mut stdout.lock()).await;

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Run failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
