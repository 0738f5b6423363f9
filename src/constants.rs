//! Centralized constants for the geo-weather crate
//!
//! This module consolidates constants that are used across multiple modules
//! to avoid duplication and ensure consistency.

/// External API endpoints
pub mod api {
    /// US Census Bureau geocoding service
    pub const CENSUS_GEOCODER_URL: &str = "https://geocoding.geo.census.gov";

    /// National Weather Service gridded forecast API
    pub const NWS_API_URL: &str = "https://api.weather.gov";

    /// IP geolocation API (free, no key required)
    pub const IP_API_URL: &str = "http://ip-api.com/json";
}

/// Forecast settings
pub mod forecast {
    /// Maximum number of forecast periods returned to callers
    pub const FORECAST_PERIOD_LIMIT: usize = 14;
}

/// Device location settings
pub mod location {
    /// Maximum wait for a location fix, in seconds
    pub const LOCATION_TIMEOUT_SECS: u64 = 10;

    /// How long a cached fix stays acceptable, in seconds (5 minutes)
    pub const LOCATION_MAX_AGE_SECS: u64 = 300;

    /// Cached fix file name
    pub const LOCATION_CACHE_FILE: &str = "last_fix.json";
}
