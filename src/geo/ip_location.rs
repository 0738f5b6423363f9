//! IP-based device location
//!
//! Uses ip-api.com as the current-location capability with a file-cached
//! last fix. A fix younger than five minutes is reused; otherwise a single
//! lookup runs with a ten second ceiling. One request per call, no retries.

use crate::constants::api::IP_API_URL;
use crate::constants::location::{
    LOCATION_CACHE_FILE, LOCATION_MAX_AGE_SECS, LOCATION_TIMEOUT_SECS,
};
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::LocationFix;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

/// IP location service with a cached last fix
#[derive(Debug)]
pub struct IpLocator {
    client: reqwest::Client,
    base_url: String,
    cache_path: Option<PathBuf>,
}

/// ip-api.com response
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: String,
    lat: Option<f64>,
    lon: Option<f64>,
    city: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    country: Option<String>,
}

/// Cached fix data
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CachedFix {
    fix: LocationFix,
    timestamp: u64,
}

impl IpLocator {
    /// Create a new IP locator with the default cache path
    pub fn new() -> Self {
        let cache_path = dirs::cache_dir().map(|p| p.join("geo-weather").join(LOCATION_CACHE_FILE));
        Self::build(IP_API_URL, cache_path)
    }

    /// Create an IP locator with a specific cache path
    pub fn with_cache_path(cache_path: PathBuf) -> Self {
        Self::build(IP_API_URL, Some(cache_path))
    }

    /// Create an IP locator without caching
    pub fn without_cache() -> Self {
        Self::build(IP_API_URL, None)
    }

    /// Create an IP locator against a specific base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::build(base_url, None)
    }

    fn build(base_url: impl Into<String>, cache_path: Option<PathBuf>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(LOCATION_TIMEOUT_SECS))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            cache_path,
        }
    }

    /// Get the current location
    ///
    /// Single-shot: returns a cached fix when one is fresh enough, otherwise
    /// performs exactly one upstream lookup and resolves or fails once.
    pub async fn locate(&self) -> Result<LocationFix> {
        if let Some(cached) = self.load_cache() {
            return Ok(cached);
        }

        let fix = self.fetch_location().await?;
        self.save_cache(&fix);

        Ok(fix)
    }

    /// Fetch the current location from the IP geolocation service
    async fn fetch_location(&self) -> Result<LocationFix> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(|e| Error::Location(format!("IP location request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(Error::Location(format!(
                "IP location API returned status: {}",
                response.status()
            )));
        }

        let data: IpApiResponse = response
            .json()
            .await
            .map_err(|e| Error::Location(format!("Failed to parse IP location response: {}", e)))?;

        if data.status != "success" {
            return Err(Error::Location("IP location lookup failed".to_string()));
        }

        let lat = data
            .lat
            .ok_or_else(|| Error::Location("No latitude in response".to_string()))?;
        let lon = data
            .lon
            .ok_or_else(|| Error::Location("No longitude in response".to_string()))?;

        let coords = Coordinates::new(lat, lon);
        coords.validate()?;

        // Build display name from available fields
        let display_name = [data.city, data.region_name, data.country]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(", ");

        Ok(LocationFix {
            coords,
            display_name: if display_name.is_empty() {
                "Unknown Location".to_string()
            } else {
                display_name
            },
        })
    }

    /// Load the cached fix if still fresh
    fn load_cache(&self) -> Option<LocationFix> {
        let cache_path = self.cache_path.as_ref()?;

        if !cache_path.exists() {
            return None;
        }

        let content = fs::read_to_string(cache_path).ok()?;
        let cached: CachedFix = serde_json::from_str(&content).ok()?;

        let now = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .ok()?
            .as_secs();

        if now - cached.timestamp < LOCATION_MAX_AGE_SECS {
            Some(cached.fix)
        } else {
            None
        }
    }

    /// Save a fix to the cache
    fn save_cache(&self, fix: &LocationFix) {
        let Some(cache_path) = &self.cache_path else {
            return;
        };

        if let Some(parent) = cache_path.parent() {
            let _ = fs::create_dir_all(parent);
        }

        let timestamp = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let cached = CachedFix {
            fix: fix.clone(),
            timestamp,
        };

        if let Ok(content) = serde_json::to_string_pretty(&cached) {
            let _ = fs::write(cache_path, content);
        }
    }

    /// Clear the cached fix
    pub fn clear_cache(&self) {
        if let Some(cache_path) = &self.cache_path {
            let _ = fs::remove_file(cache_path);
        }
    }

    /// How long a cached fix stays acceptable
    pub fn max_fix_age() -> Duration {
        Duration::from_secs(LOCATION_MAX_AGE_SECS)
    }
}

impl Default for IpLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_ip_locator_creation() {
        let locator = IpLocator::new();
        assert!(locator.cache_path.is_some());
    }

    #[test]
    fn test_ip_locator_without_cache() {
        let locator = IpLocator::without_cache();
        assert!(locator.cache_path.is_none());
    }

    #[test]
    fn test_cache_operations() {
        let temp_dir = TempDir::new().unwrap();
        let cache_path = temp_dir.path().join("test_fix.json");
        let locator = IpLocator::with_cache_path(cache_path.clone());

        // Initially no cache
        assert!(locator.load_cache().is_none());

        let fix = LocationFix {
            coords: Coordinates::new(40.7128, -74.0060),
            display_name: "New York".to_string(),
        };
        locator.save_cache(&fix);

        let loaded = locator.load_cache().unwrap();
        assert_eq!(loaded.coords.lat, 40.7128);
        assert_eq!(loaded.display_name, "New York");

        locator.clear_cache();
        assert!(locator.load_cache().is_none());
    }

    #[test]
    fn test_stale_cache_is_ignored() {
        let temp_dir = TempDir::new().unwrap();
        let cache_path = temp_dir.path().join("stale_fix.json");
        let locator = IpLocator::with_cache_path(cache_path.clone());

        let cached = CachedFix {
            fix: LocationFix {
                coords: Coordinates::new(40.7128, -74.0060),
                display_name: "New York".to_string(),
            },
            // Well past the five minute window
            timestamp: 1000,
        };
        fs::write(&cache_path, serde_json::to_string(&cached).unwrap()).unwrap();

        assert!(locator.load_cache().is_none());
    }

    #[test]
    fn test_max_fix_age() {
        assert_eq!(IpLocator::max_fix_age().as_secs(), 300);
    }

    #[tokio::test]
    async fn test_locate_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "success",
                "lat": 47.6062,
                "lon": -122.3321,
                "city": "Seattle",
                "regionName": "Washington",
                "country": "United States"
            })))
            .mount(&mock_server)
            .await;

        let locator = IpLocator::with_base_url(mock_server.uri());
        let fix = locator.locate().await.unwrap();

        assert_eq!(fix.coords.lat, 47.6062);
        assert_eq!(fix.coords.lon, -122.3321);
        assert_eq!(fix.display_name, "Seattle, Washington, United States");
    }

    #[tokio::test]
    async fn test_locate_failure_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "fail"
            })))
            .mount(&mock_server)
            .await;

        let locator = IpLocator::with_base_url(mock_server.uri());
        let err = locator.locate().await.unwrap_err();

        assert!(matches!(err, Error::Location(_)));
    }

    #[tokio::test]
    async fn test_locate_error_status_carries_code() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let locator = IpLocator::with_base_url(mock_server.uri());
        let err = locator.locate().await.unwrap_err();

        match err {
            Error::Location(msg) => assert!(msg.contains("503"), "message was: {}", msg),
            other => panic!("expected Location error, got {:?}", other),
        }
    }

    #[test]
    fn test_cached_fix_serialization() {
        let cached = CachedFix {
            fix: LocationFix {
                coords: Coordinates::new(40.7128, -74.0060),
                display_name: "NYC".to_string(),
            },
            timestamp: 1704200000,
        };

        let json = serde_json::to_string(&cached).unwrap();
        let parsed: CachedFix = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.fix.coords.lat, 40.7128);
        assert_eq!(parsed.timestamp, 1704200000);
    }
}
