//! geo-weather: location search and multi-day weather forecasts
//!
//! A library and CLI tool for resolving a free-text location (street
//! address, raw coordinates, or the caller's IP position) and fetching the
//! National Weather Service multi-day forecast for it.
//!
//! ## Features
//!
//! - "lat, lon" fast path that never touches the network
//! - Census one-line-address geocoding with a reverse lookup
//! - Two-step NWS forecast retrieval (points lookup, then grid forecast)
//! - Single-shot IP location with a short-lived cached fix
//! - HTTP API + CLI interface
//!
//! ## Quick Start
//!
//! ```rust
//! use geo_weather::coord::{Coordinates, LocationQuery};
//!
//! // Raw coordinate pairs short-circuit the geocoder entirely
//! let query = LocationQuery::from_input("40.748817, -73.985428");
//! assert!(matches!(query, LocationQuery::Coords(_)));
//!
//! // Anything else is treated as a one-line address
//! let query = LocationQuery::from_input("350 Fifth Avenue, New York, NY 10118");
//! assert!(matches!(query, LocationQuery::Address(_)));
//!
//! // Out-of-range pairs are not coordinates
//! assert!(Coordinates::parse("95, -74").is_none());
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod coord;
pub mod error;
pub mod format;
pub mod geo;
pub mod server;
pub mod weather;

// Re-export commonly used types
pub use config::Config;
pub use coord::{Coordinates, LocationQuery};
pub use error::{Error, Result};
pub use geo::{resolve_location, GeoBackend, LocationFix};
pub use weather::{ForecastPeriod, ForecastReport};
