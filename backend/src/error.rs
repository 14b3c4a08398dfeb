//! Error handling for the Krishi Advisor platform
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Validation error: {0}")]
    ValidationError(String),

    // Terminal pipeline errors
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    #[error("Location outside service area: {name} ({latitude}, {longitude})")]
    OutsideServiceArea {
        name: String,
        latitude: f64,
        longitude: f64,
    },

    // External service errors
    #[error("Malformed weather data: {0}")]
    UpstreamData(String),

    #[error("Weather service unavailable: {0}")]
    WeatherServiceUnavailable(String),

    #[error("Market price API error: {0}")]
    MarketApi(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        match errors.field_errors().into_iter().next() {
            Some((field, errs)) => AppError::Validation {
                field: field.to_string(),
                message: errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field)),
            },
            None => AppError::ValidationError(errors.to_string()),
        }
    }
}

impl From<shared::ReferenceError> for AppError {
    fn from(err: shared::ReferenceError) -> Self {
        AppError::Configuration(err.to_string())
    }
}

impl From<shared::SeriesError> for AppError {
    fn from(err: shared::SeriesError) -> Self {
        AppError::UpstreamData(err.to_string())
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_hi: format!("अमान्य जानकारी: {}", message),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: format!("अमान्य जानकारी: {}", msg),
                    field: None,
                },
            ),
            AppError::LocationNotFound(query) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "LOCATION_NOT_FOUND".to_string(),
                    message_en: format!("Could not find location: {}", query),
                    message_hi: format!("स्थान नहीं मिला: {}", query),
                    field: Some("location".to_string()),
                },
            ),
            AppError::OutsideServiceArea { name, .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorDetail {
                    code: "OUTSIDE_SERVICE_AREA".to_string(),
                    message_en: format!(
                        "{} is outside India; agricultural analysis is only available for Indian locations",
                        name
                    ),
                    message_hi: format!(
                        "{} भारत से बाहर है; कृषि विश्लेषण केवल भारतीय स्थानों के लिए उपलब्ध है",
                        name
                    ),
                    field: Some("location".to_string()),
                },
            ),
            AppError::UpstreamData(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "UPSTREAM_DATA_ERROR".to_string(),
                    message_en: format!("Weather data could not be processed: {}", msg),
                    message_hi: "मौसम डेटा संसाधित नहीं किया जा सका".to_string(),
                    field: None,
                },
            ),
            AppError::WeatherServiceUnavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                    message_en: "Weather service is temporarily unavailable".to_string(),
                    message_hi: "मौसम सेवा अस्थायी रूप से उपलब्ध नहीं है".to_string(),
                    field: None,
                },
            ),
            AppError::MarketApi(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "MARKET_API_ERROR".to_string(),
                    message_en: format!("Market price API error: {}", msg),
                    message_hi: format!("मंडी भाव सेवा में त्रुटि: {}", msg),
                    field: None,
                },
            ),
            AppError::ExternalService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "EXTERNAL_SERVICE_ERROR".to_string(),
                    message_en: format!("External service error: {}", msg),
                    message_hi: format!("बाहरी सेवा में त्रुटि: {}", msg),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: format!("Configuration error: {}", msg),
                    message_hi: format!("कॉन्फ़िगरेशन त्रुटि: {}", msg),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: "आंतरिक सर्वर त्रुटि".to_string(),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message_en: "An internal server error occurred".to_string(),
                    message_hi: "आंतरिक सर्वर त्रुटि".to_string(),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
