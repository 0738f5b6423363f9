//! US Census Bureau geocoding backend
//!
//! Uses the free census one-line-address geocoder. No API key required.
//! Coordinates come back in the x/y convention: x is longitude, y is latitude.

use crate::constants::api::CENSUS_GEOCODER_URL;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::{AddressMatch, GeoBackend};
use serde::Deserialize;

const BENCHMARK: &str = "Public_AR_Current";
const VINTAGE: &str = "Current_Current";

/// Census geocoding backend
#[derive(Debug, Clone)]
pub struct CensusGeocoder {
    client: reqwest::Client,
    base_url: String,
}

/// Census geocoder response envelope
#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    result: Option<GeocodeResult>,
}

#[derive(Debug, Deserialize, Default)]
struct GeocodeResult {
    #[serde(rename = "addressMatches", default)]
    address_matches: Vec<AddressMatch>,
}

impl CensusGeocoder {
    /// Create a new census geocoding backend
    pub fn new() -> Self {
        Self::with_base_url(CENSUS_GEOCODER_URL)
    }

    /// Create a backend against a specific base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch_matches(&self, url: &str) -> Result<Vec<AddressMatch>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Geocoding(format!("Geocoder request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Geocoding(format!(
                "Geocoder returned status: {}",
                response.status()
            )));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| Error::Geocoding(format!("Failed to parse geocoder response: {}", e)))?;

        Ok(body.result.map(|r| r.address_matches).unwrap_or_default())
    }
}

impl Default for CensusGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoBackend for CensusGeocoder {
    async fn geocode(&self, address: &str) -> Result<Coordinates> {
        let url = format!(
            "{}/geocoder/locations/onelineaddress?address={}&benchmark={}&format=json",
            self.base_url,
            urlencoding::encode(address),
            BENCHMARK
        );

        let matches = self.fetch_matches(&url).await?;
        let Some(first) = matches.into_iter().next() else {
            return Err(Error::AddressNotFound);
        };

        let coords = Coordinates::new(first.coordinates.y, first.coordinates.x);
        coords.validate()?;

        tracing::debug!(lat = coords.lat, lon = coords.lon, "geocoded address");
        Ok(coords)
    }

    async fn reverse_geocode(&self, coords: Coordinates) -> Result<Vec<AddressMatch>> {
        coords.validate()?;

        let url = format!(
            "{}/geocoder/geographies/coordinates?x={}&y={}&benchmark={}&vintage={}&format=json",
            self.base_url, coords.lon, coords.lat, BENCHMARK, VINTAGE
        );

        self.fetch_matches(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn one_match_body() -> serde_json::Value {
        serde_json::json!({
            "result": {
                "addressMatches": [
                    {
                        "matchedAddress": "350 FIFTH AVE, NEW YORK, NY, 10118",
                        "coordinates": {"x": -73.985428, "y": 40.748817}
                    },
                    {
                        "matchedAddress": "350 5TH AVE, NEW YORK, NY, 10118",
                        "coordinates": {"x": -73.9855, "y": 40.7489}
                    }
                ]
            }
        })
    }

    #[tokio::test]
    async fn test_geocode_takes_first_match() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geocoder/locations/onelineaddress"))
            .and(query_param("benchmark", "Public_AR_Current"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(one_match_body()))
            .mount(&mock_server)
            .await;

        let geocoder = CensusGeocoder::with_base_url(mock_server.uri());
        let coords = geocoder
            .geocode("350 Fifth Avenue, New York, NY 10118")
            .await
            .unwrap();

        // y maps to latitude, x to longitude
        assert_eq!(coords.lat, 40.748817);
        assert_eq!(coords.lon, -73.985428);
    }

    #[tokio::test]
    async fn test_geocode_no_matches_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geocoder/locations/onelineaddress"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": {"addressMatches": []}
            })))
            .mount(&mock_server)
            .await;

        let geocoder = CensusGeocoder::with_base_url(mock_server.uri());
        let err = geocoder.geocode("nowhere at all").await.unwrap_err();

        assert!(matches!(err, Error::AddressNotFound));
    }

    #[tokio::test]
    async fn test_geocode_missing_result_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geocoder/locations/onelineaddress"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&mock_server)
            .await;

        let geocoder = CensusGeocoder::with_base_url(mock_server.uri());
        let err = geocoder.geocode("anywhere").await.unwrap_err();

        assert!(matches!(err, Error::AddressNotFound));
    }

    #[tokio::test]
    async fn test_geocode_error_status_carries_code() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geocoder/locations/onelineaddress"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let geocoder = CensusGeocoder::with_base_url(mock_server.uri());
        let err = geocoder.geocode("350 Fifth Avenue").await.unwrap_err();

        match err {
            Error::Geocoding(msg) => assert!(msg.contains("503"), "message was: {}", msg),
            other => panic!("expected Geocoding error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_geocode_invalid_body_is_transport_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geocoder/locations/onelineaddress"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&mock_server)
            .await;

        let geocoder = CensusGeocoder::with_base_url(mock_server.uri());
        let err = geocoder.geocode("350 Fifth Avenue").await.unwrap_err();

        assert!(matches!(err, Error::Geocoding(_)));
    }

    #[tokio::test]
    async fn test_geocode_url_encodes_address() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geocoder/locations/onelineaddress"))
            .and(query_param("address", "350 Fifth Avenue, New York"))
            .respond_with(ResponseTemplate::new(200).set_body_json(one_match_body()))
            .mount(&mock_server)
            .await;

        let geocoder = CensusGeocoder::with_base_url(mock_server.uri());
        let coords = geocoder.geocode("350 Fifth Avenue, New York").await.unwrap();

        assert_eq!(coords.lat, 40.748817);
    }

    #[tokio::test]
    async fn test_reverse_geocode_returns_matches() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geocoder/geographies/coordinates"))
            .and(query_param("x", "-73.985428"))
            .and(query_param("y", "40.748817"))
            .and(query_param("vintage", "Current_Current"))
            .respond_with(ResponseTemplate::new(200).set_body_json(one_match_body()))
            .mount(&mock_server)
            .await;

        let geocoder = CensusGeocoder::with_base_url(mock_server.uri());
        let matches = geocoder
            .reverse_geocode(Coordinates::new(40.748817, -73.985428))
            .await
            .unwrap();

        assert_eq!(matches.len(), 2);
        assert_eq!(
            matches[0].matched_address.as_deref(),
            Some("350 FIFTH AVE, NEW YORK, NY, 10118")
        );
    }

    #[tokio::test]
    async fn test_reverse_geocode_empty_matches_is_ok() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/geocoder/geographies/coordinates"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "result": {"addressMatches": []}
            })))
            .mount(&mock_server)
            .await;

        let geocoder = CensusGeocoder::with_base_url(mock_server.uri());
        let matches = geocoder
            .reverse_geocode(Coordinates::new(0.0, 0.0))
            .await
            .unwrap();

        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_reverse_geocode_rejects_invalid_coordinates() {
        let geocoder = CensusGeocoder::with_base_url("http://127.0.0.1:0");
        let err = geocoder
            .reverse_geocode(Coordinates::new(95.0, 0.0))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidCoordinates(_)));
    }
}
