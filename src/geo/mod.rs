//! Geocoding module
//!
//! Provides address geocoding (free text to coordinates), reverse geocoding,
//! and IP-based device location.

pub mod census;
pub mod ip_location;

use crate::coord::{Coordinates, LocationQuery};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One address match returned by the geocoder
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressMatch {
    /// Normalized address text for this match
    #[serde(rename = "matchedAddress")]
    pub matched_address: Option<String>,

    /// Match coordinates; `x` is longitude, `y` is latitude
    pub coordinates: MatchCoordinates,
}

/// Geocoder coordinate pair in the upstream convention
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MatchCoordinates {
    pub x: f64,
    pub y: f64,
}

/// A located position with a human-readable description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationFix {
    pub coords: Coordinates,
    pub display_name: String,
}

/// Trait for geocoding backends
pub trait GeoBackend: Send + Sync {
    /// Geocode a one-line address to coordinates
    ///
    /// Returns the first (best) match for the address
    fn geocode(
        &self,
        address: &str,
    ) -> impl std::future::Future<Output = Result<Coordinates>> + Send;

    /// Reverse geocode coordinates to address matches
    fn reverse_geocode(
        &self,
        coords: Coordinates,
    ) -> impl std::future::Future<Output = Result<Vec<AddressMatch>>> + Send;
}

/// Resolve free-text input to coordinates
///
/// A literal "lat, lon" pair is returned directly with no network call;
/// anything else is submitted to the geocoder as a one-line address. Empty
/// input fails before any network attempt.
pub async fn resolve_location<G: GeoBackend>(backend: &G, input: &str) -> Result<Coordinates> {
    let input = input.trim();
    if input.is_empty() {
        return Err(Error::AddressNotFound);
    }

    match LocationQuery::from_input(input) {
        LocationQuery::Coords(coords) => {
            tracing::debug!(lat = coords.lat, lon = coords.lon, "input parsed as coordinates");
            Ok(coords)
        }
        LocationQuery::Address(address) => backend.geocode(&address).await,
    }
}

/// Get the default geocoding backend
pub fn get_geocoder() -> census::CensusGeocoder {
    census::CensusGeocoder::new()
}

/// Get the IP location service
pub fn get_ip_locator() -> ip_location::IpLocator {
    ip_location::IpLocator::new()
}
