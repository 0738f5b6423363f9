//! Server shared state
//!
//! Holds configuration and the upstream clients for the HTTP server. All
//! fields are immutable after construction; requests share clients but no
//! mutable state.

use crate::config::Config;
use crate::geo::census::CensusGeocoder;
use crate::geo::ip_location::IpLocator;
use crate::weather::nws::NwsClient;

/// Shared state for the HTTP server
pub struct AppState {
    /// Configuration
    pub config: Config,

    /// Address geocoding backend
    pub geocoder: CensusGeocoder,

    /// Forecast backend
    pub weather: NwsClient,

    /// IP location service
    pub locator: IpLocator,
}

impl AppState {
    /// Create new application state with default upstream endpoints
    pub fn new(config: Config) -> Self {
        let geocoder = CensusGeocoder::new();
        let weather = NwsClient::new(&config.weather.contact);
        let locator = IpLocator::new();

        Self {
            config,
            geocoder,
            weather,
            locator,
        }
    }
}
