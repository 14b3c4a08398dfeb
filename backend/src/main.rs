//! Krishi Advisor - Backend Server
//!
//! Crop, season and livestock recommendations for Indian farmers from a
//! free-text location.

use std::net::SocketAddr;

use krishi_advisor_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "krishi_server=debug,krishi_advisor_backend=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Krishi Advisor Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!("Climate window: {} days", config.weather.history_days);

    if config.market.api_key.is_empty() {
        tracing::warn!("KRISHI_MARKET__API_KEY is not set; market price lookups will fail");
    }

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;

    // Create application state
    let state = AppState::from_config(config)?;

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
