// API Server Binary Entry Point
//
// Purpose: Serve estimates over HTTP from one shared estimator
// Usage: cargo run --features api --bin api_server

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use water_usage_estimator::{create_router, AppState, EstimatorConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (structured logging)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    // Default log level: info for our crate, warn for others
                    "water_usage_estimator=info,tower_http=debug,warn".into()
                }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting API server...");

    // Configuration from environment variables
    let config_path = std::env::var("WATER_CONFIG").ok().map(PathBuf::from);
    let mut config = EstimatorConfig::load_or_default(config_path.as_deref())?;

    if let Some(seed) = std::env::var("WATER_SEED").ok().and_then(|s| s.parse().ok()) {
        config.seed = seed;
    }

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    tracing::info!("Configuration:");
    tracing::info!("  WATER_CONFIG: {:?}", config_path);
    tracing::info!("  SEED: {}", config.seed);
    tracing::info!("  PORT: {}", port);

    // Generates the sample and fits the model once for the process lifetime
    let state = AppState::new(config)?;
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
