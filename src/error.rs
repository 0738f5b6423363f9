//! Error types for geo-weather

use thiserror::Error;

/// Main error type for geo-weather operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Address not found")]
    AddressNotFound,

    #[error("Geocoding error: {0}")]
    Geocoding(String),

    #[error("Forecast URL not found")]
    ForecastUnavailable,

    #[error("Forecast error: {0}")]
    Forecast(String),

    #[error("Location error: {0}")]
    Location(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Server error: {0}")]
    Server(String),
}

/// Convenience result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
