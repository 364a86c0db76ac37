mod models;
mod handlers;
mod routes;
mod docs;
mod config;
mod error;
mod server;

use config::Config;
use tracing::{info, error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use std::panic;

#[tokio::main]
async fn main() {

    // Set panic hook for better error messages
    panic::set_hook(Box::new(|info| {
        eprintln!("PANIC: {info}");
    }));

    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default to info level, but allow debug for our app
            "snapchef_backend=debug,tower_http=debug,axum::rejection=trace,info".into()
        }))
        .init();

    info!("Starting server...");

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        warn!("Using default configuration");
        Config::default()
    });
    info!("Environment: {}", config.environment);
    if config.reload && !config.is_development() {
        warn!("RELOAD is set outside development; it has no effect on the running server");
    }
    if config.is_production() && config.docs_enabled {
        warn!("API docs are exposed in production at /docs");
    }

    if let Err(e) = server::start(&config).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
