//! devops-demo: health, version, and failure-injection endpoints.
//!
//! This is the application entry point. It initializes tracing, resolves
//! configuration from CLI flags and environment variables, builds the Axum
//! router, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devops_demo::config::{AppConfig, DEFAULT_LOG_FILTER, DEFAULT_LOG_FORMAT};
use devops_demo::http::start_server;
use devops_demo::routes::create_router;
use devops_demo::state::AppState;

/// devops-demo: a minimal HTTP service for health checks and failure injection
#[derive(Parser, Debug)]
#[command(name = "devops-demo", version, about)]
struct Args {
    /// Listening port (overrides the PORT environment variable)
    #[arg(short, long)]
    port: Option<u16>,

    /// Reported version string (overrides the APP_VERSION environment variable)
    #[arg(long)]
    app_version: Option<String>,

    /// Log level filter (e.g., "devops_demo=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
    let log_format =
        std::env::var("LOG_FORMAT").unwrap_or_else(|_| DEFAULT_LOG_FORMAT.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    // Resolve configuration (CLI > env > default)
    let config = AppConfig::resolve(args.port, args.app_version);
    tracing::info!(port = config.port, version = %config.version, "Loaded configuration");

    // Create application state and router
    let state = AppState::new(config.clone());
    let app = create_router(state);

    // Start server; a bind failure propagates and exits non-zero
    start_server(app, &config).await?;

    Ok(())
}
