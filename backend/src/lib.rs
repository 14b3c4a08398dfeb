//! Krishi Advisor backend
//!
//! Season-aware crop and livestock advice for Indian farmers, served over
//! HTTP. The agronomic rules live in the `shared` crate; this crate wires
//! them to the geocoding, climate and mandi price services.

use std::{fs::File, sync::Arc};

use axum::{routing::get, Router};
use shared::{CropCatalog, ReferenceData, RegionProfile};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};

use external::{
    ClimateSource, DataGovMarketClient, Geocoder, MarketPriceSource, OpenMeteoClient,
    OpenMeteoGeocoder,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub reference: Arc<ReferenceData>,
    pub geocoder: Arc<dyn Geocoder>,
    pub climate: Arc<dyn ClimateSource>,
    pub market: Arc<dyn MarketPriceSource>,
}

impl AppState {
    /// Build state backed by the live external services
    pub fn from_config(config: Config) -> AppResult<Self> {
        let reference = load_reference(&config)?;
        Ok(Self {
            geocoder: Arc::new(OpenMeteoGeocoder::new(&config.geocoding)?),
            climate: Arc::new(OpenMeteoClient::new(&config.weather)?),
            market: Arc::new(DataGovMarketClient::new(&config.market)?),
            reference: Arc::new(reference),
            config: Arc::new(config),
        })
    }
}

/// Load reference tables, preferring a configured crop table over the bundled one
pub fn load_reference(config: &Config) -> AppResult<ReferenceData> {
    let crops = match &config.reference.crop_table_path {
        Some(path) => {
            tracing::info!("Loading crop table from {}", path);
            let file = File::open(path)
                .map_err(|e| AppError::Configuration(format!("crop table {}: {}", path, e)))?;
            CropCatalog::from_csv_reader(file)?
        }
        None => CropCatalog::embedded()?,
    };
    tracing::info!("Loaded {} crop requirements", crops.len());
    Ok(ReferenceData::new(crops, RegionProfile::default()))
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Krishi Advisor API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
