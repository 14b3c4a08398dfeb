//! Route definitions for the Krishi Advisor platform

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/advisory", post(handlers::create_advisory))
        .nest("/weather", weather_routes())
        .nest("/market", market_routes())
}

fn weather_routes() -> Router<AppState> {
    Router::new().route("/current", get(handlers::get_current_conditions))
}

fn market_routes() -> Router<AppState> {
    Router::new().route("/prices", get(handlers::get_market_prices))
}
