//! National Weather Service forecast backend
//!
//! Forecasts come from api.weather.gov in two steps: a points lookup
//! resolves the grid-specific forecast endpoint for a coordinate pair, then
//! the periods are fetched from that endpoint. The service's usage policy
//! requires an identifying User-Agent with contact information on every
//! request.

use crate::constants::api::NWS_API_URL;
use crate::constants::forecast::FORECAST_PERIOD_LIMIT;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::weather::ForecastPeriod;
use serde::Deserialize;

/// NWS forecast client
#[derive(Debug, Clone)]
pub struct NwsClient {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PointsResponse {
    properties: Option<PointsProperties>,
}

#[derive(Debug, Deserialize)]
struct PointsProperties {
    forecast: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    properties: Option<ForecastProperties>,
}

#[derive(Debug, Deserialize, Default)]
struct ForecastProperties {
    #[serde(default)]
    periods: Vec<ForecastPeriod>,
}

impl NwsClient {
    /// Create a new NWS client
    ///
    /// `contact` goes into the User-Agent so the service can reach out about
    /// problematic traffic.
    pub fn new(contact: &str) -> Self {
        Self::with_base_url(NWS_API_URL, contact)
    }

    /// Create a client against a specific base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>, contact: &str) -> Self {
        let user_agent = format!("geo-weather/{} ({})", env!("CARGO_PKG_VERSION"), contact);
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Resolve the grid forecast endpoint for a coordinate pair
    async fn forecast_url(&self, coords: Coordinates) -> Result<String> {
        let url = format!("{}/points/{},{}", self.base_url, coords.lat, coords.lon);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Forecast(format!("Points request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Forecast(format!(
                "Points request returned status: {}",
                response.status()
            )));
        }

        let body: PointsResponse = response
            .json()
            .await
            .map_err(|e| Error::Forecast(format!("Failed to parse points response: {}", e)))?;

        body.properties
            .and_then(|p| p.forecast)
            .ok_or(Error::ForecastUnavailable)
    }

    /// Fetch the multi-day forecast for a coordinate pair
    ///
    /// Returns at most fourteen periods in upstream order. When the points
    /// lookup fails the forecast request is never attempted. A response
    /// without a periods list yields an empty forecast rather than an error.
    pub async fn fetch_forecast(&self, coords: Coordinates) -> Result<Vec<ForecastPeriod>> {
        coords.validate()?;

        let forecast_url = self.forecast_url(coords).await?;
        tracing::debug!(url = %forecast_url, "fetching forecast periods");

        let response = self
            .client
            .get(&forecast_url)
            .send()
            .await
            .map_err(|e| Error::Forecast(format!("Forecast request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Forecast(format!(
                "Forecast request returned status: {}",
                response.status()
            )));
        }

        let body: ForecastResponse = response
            .json()
            .await
            .map_err(|e| Error::Forecast(format!("Failed to parse forecast response: {}", e)))?;

        let mut periods = body.properties.map(|p| p.periods).unwrap_or_default();
        periods.truncate(FORECAST_PERIOD_LIMIT);

        tracing::debug!(count = periods.len(), "forecast periods loaded");
        Ok(periods)
    }
}
