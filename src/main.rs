//! Marquee: a web interface to a movies database.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from an optional TOML file plus `POSTGRES_*` environment
//! overrides, builds the connection pool, sets up the Axum router, and runs
//! the HTTP server until SIGINT/SIGTERM, closing the pool on the way out.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee::config::{AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use marquee::db::MovieStore;
use marquee::routes::create_router;
use marquee::state::AppState;
use marquee::templates::init_templates;

/// Marquee: a web interface to a movies database
#[derive(Parser, Debug)]
#[command(name = "marquee", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "marquee=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration (file is optional; POSTGRES_* env vars override)
    let mut config = AppConfig::load(&args.config)?;

    // Default site_name to the host name if not configured
    if config.ui.site_name.is_none() {
        config.ui.site_name = std::env::var("HOSTNAME").ok();
    }

    tracing::info!(
        db_host = %config.database.host,
        db_port = config.database.port,
        db_name = %config.database.dbname,
        "Loaded configuration"
    );

    // Initialize Tera templates
    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Build the connection pool (lazy; no connection is attempted yet)
    let store = MovieStore::connect(&config.database)?;
    tracing::info!("Initialized connection pool");

    // Create application state and router
    let state = AppState::new(config.clone(), tera, store.clone());
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.http.host, config.http.port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Drain the pool once the server has stopped accepting connections
    store.close();
    tracing::info!("Connection pool closed, exiting");

    Ok(())
}

/// Resolves when SIGINT or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
