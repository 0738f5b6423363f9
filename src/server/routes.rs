//! HTTP API routes
//!
//! Defines all REST API endpoints for the server.

use crate::coord::Coordinates;
use crate::error::Error;
use crate::geo::{resolve_location, AddressMatch, GeoBackend, LocationFix};
use crate::server::state::AppState;
use crate::weather::ForecastReport;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::services::ServeDir;

/// Create the API router
pub fn create_router(state: Arc<AppState>) -> Router {
    // Determine static files path
    // Try relative to cwd first, then fallback to common locations
    let static_path = if std::path::Path::new("static").exists() {
        "static".to_string()
    } else if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let path = exe_dir.join("static");
            if path.exists() {
                path.to_string_lossy().to_string()
            } else {
                "static".to_string()
            }
        } else {
            "static".to_string()
        }
    } else {
        "static".to_string()
    };

    Router::new()
        .route("/api/geocode", get(geocode_handler))
        .route("/api/reverse-geocode", get(reverse_geocode_handler))
        .route("/api/forecast", get(forecast_handler))
        .route("/api/location", get(location_handler))
        .route("/api/status", get(status_handler))
        .nest_service(
            "/",
            ServeDir::new(&static_path).append_index_html_on_directories(true),
        )
        .with_state(state)
}

/// API error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub code: String,
}

impl ApiError {
    fn new(error: impl Into<String>, code: &str) -> Self {
        Self {
            error: error.into(),
            code: code.to_string(),
        }
    }

    fn status(&self) -> StatusCode {
        match self.code.as_str() {
            "MISSING_PARAMETER" | "INVALID_COORDINATES" => StatusCode::BAD_REQUEST,
            "NOT_FOUND" => StatusCode::NOT_FOUND,
            "UPSTREAM_ERROR" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        (status, Json(self)).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidCoordinates(_) => "INVALID_COORDINATES",
            Error::AddressNotFound | Error::ForecastUnavailable => "NOT_FOUND",
            Error::Geocoding(_) | Error::Forecast(_) | Error::Location(_) | Error::Http(_) => {
                "UPSTREAM_ERROR"
            }
            _ => "INTERNAL_ERROR",
        };
        ApiError::new(err.to_string(), code)
    }
}

/// Geocode request parameters
#[derive(Debug, Deserialize)]
pub struct GeocodeParams {
    address: Option<String>,
}

/// Coordinate request parameters
#[derive(Debug, Deserialize)]
pub struct CoordinateParams {
    lat: Option<f64>,
    lon: Option<f64>,
}

impl CoordinateParams {
    /// Extract validated coordinates or fail with a request error
    fn coordinates(&self) -> Result<Coordinates, ApiError> {
        let (Some(lat), Some(lon)) = (self.lat, self.lon) else {
            return Err(ApiError::new(
                "Latitude and longitude are required",
                "MISSING_PARAMETER",
            ));
        };

        let coords = Coordinates::new(lat, lon);
        coords.validate().map_err(ApiError::from)?;
        Ok(coords)
    }
}

/// Resolve a free-text query to coordinates
///
/// GET /api/geocode?address=...
async fn geocode_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GeocodeParams>,
) -> Result<Json<Coordinates>, ApiError> {
    let address = params.address.as_deref().unwrap_or("").trim().to_string();
    if address.is_empty() {
        return Err(ApiError::new("Address is required", "MISSING_PARAMETER"));
    }

    tracing::info!(address = %address, "geocode request");

    let coords = resolve_location(&state.geocoder, &address)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(coords))
}

/// Reverse geocode response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ReverseGeocodeResponse {
    #[serde(rename = "addressMatches")]
    pub address_matches: Vec<AddressMatch>,
}

/// Look up address matches for a coordinate pair
///
/// GET /api/reverse-geocode?lat=..&lon=..
async fn reverse_geocode_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CoordinateParams>,
) -> Result<Json<ReverseGeocodeResponse>, ApiError> {
    let coords = params.coordinates()?;

    tracing::info!(lat = coords.lat, lon = coords.lon, "reverse geocode request");

    let address_matches = state
        .geocoder
        .reverse_geocode(coords)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ReverseGeocodeResponse { address_matches }))
}

/// Fetch the multi-day forecast for a coordinate pair
///
/// GET /api/forecast?lat=..&lon=..
async fn forecast_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CoordinateParams>,
) -> Result<Json<ForecastReport>, ApiError> {
    let coords = params.coordinates()?;

    tracing::info!(lat = coords.lat, lon = coords.lon, "forecast request");

    let periods = state
        .weather
        .fetch_forecast(coords)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(ForecastReport {
        location: coords,
        periods,
    }))
}

/// Locate the caller by IP address
///
/// GET /api/location
async fn location_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<LocationFix>, ApiError> {
    let fix = state.locator.locate().await.map_err(ApiError::from)?;
    Ok(Json(fix))
}

/// Status response
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Server is running
    pub running: bool,
    /// Server version
    pub version: String,
}

/// Server status endpoint
///
/// GET /api/status
async fn status_handler(State(_state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        running: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
