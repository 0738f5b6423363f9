//! Coordinate values and free-text query classification
//!
//! This module handles:
//! - The `Coordinates` value type and range validation
//! - Parsing free-text "lat, lon" strings
//! - Classifying user input as coordinates or an address query

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Matches two optionally-negative decimal numbers separated by a comma
/// and/or whitespace, with nothing else around them.
static COORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(-?\d+\.?\d*)[,\s]+(-?\d+\.?\d*)$").expect("coordinate regex is valid")
});

/// A geographic coordinate (latitude, longitude)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    /// Create new coordinates
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Validate that coordinates are within valid ranges
    ///
    /// Latitude: -90 to 90
    /// Longitude: -180 to 180
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.lat < -90.0 || self.lat > 90.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Latitude {} is out of range [-90, 90]",
                self.lat
            )));
        }
        if self.lon < -180.0 || self.lon > 180.0 {
            return Err(crate::error::Error::InvalidCoordinates(format!(
                "Longitude {} is out of range [-180, 180]",
                self.lon
            )));
        }
        Ok(())
    }

    /// Parse a free-text coordinate pair like "40.7128, -74.0060"
    ///
    /// Accepts a comma and/or whitespace as the separator. Returns `None`
    /// when the input doesn't look like a coordinate pair, either half fails
    /// to parse, or either value is outside its valid range. Pure function;
    /// callers fall back to address geocoding on `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let caps = COORD_RE.captures(input.trim())?;
        let lat: f64 = caps[1].parse().ok()?;
        let lon: f64 = caps[2].parse().ok()?;

        let coords = Self::new(lat, lon);
        coords.validate().ok()?;
        Some(coords)
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.lat, self.lon)
    }
}

/// A user query, classified once at the edge
///
/// Free-text input is either a literal coordinate pair or an address to be
/// geocoded. Resolving the branch here keeps every downstream call site on
/// a single dispatch instead of re-deriving the distinction.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationQuery {
    /// Input parsed as a raw coordinate pair
    Coords(Coordinates),
    /// Input to be submitted to the geocoder as free text
    Address(String),
}

impl LocationQuery {
    /// Classify free-text input
    pub fn from_input(input: &str) -> Self {
        match Coordinates::parse(input) {
            Some(coords) => Self::Coords(coords),
            None => Self::Address(input.trim().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_comma_separated() {
        let coords = Coordinates::parse("40.748817, -73.985428").unwrap();
        assert_eq!(coords.lat, 40.748817);
        assert_eq!(coords.lon, -73.985428);
    }

    #[test]
    fn test_parse_no_space() {
        let coords = Coordinates::parse("40.7128,-74.0060").unwrap();
        assert_eq!(coords.lat, 40.7128);
        assert_eq!(coords.lon, -74.0060);
    }

    #[test]
    fn test_parse_whitespace_separator() {
        let coords = Coordinates::parse("40.7128 -74.0060").unwrap();
        assert_eq!(coords.lat, 40.7128);
        assert_eq!(coords.lon, -74.0060);
    }

    #[test]
    fn test_parse_integers() {
        let coords = Coordinates::parse("40, -74").unwrap();
        assert_eq!(coords.lat, 40.0);
        assert_eq!(coords.lon, -74.0);
    }

    #[test]
    fn test_parse_trims_input() {
        let coords = Coordinates::parse("  -33.8688, 151.2093  ").unwrap();
        assert_eq!(coords.lat, -33.8688);
        assert_eq!(coords.lon, 151.2093);
    }

    #[test]
    fn test_parse_rejects_out_of_range_latitude() {
        assert!(Coordinates::parse("90.5, 0").is_none());
        assert!(Coordinates::parse("-91, 0").is_none());
    }

    #[test]
    fn test_parse_rejects_out_of_range_longitude() {
        assert!(Coordinates::parse("0, 180.1").is_none());
        assert!(Coordinates::parse("0, -181").is_none());
    }

    #[test]
    fn test_parse_accepts_range_boundaries() {
        let coords = Coordinates::parse("90, -180").unwrap();
        assert_eq!(coords.lat, 90.0);
        assert_eq!(coords.lon, -180.0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(Coordinates::parse("").is_none());
        assert!(Coordinates::parse("not coordinates").is_none());
        assert!(Coordinates::parse("40.7128").is_none());
        assert!(Coordinates::parse("40.7, -74.0, 12").is_none());
        assert!(Coordinates::parse("40.7a, -74.0").is_none());
        assert!(Coordinates::parse("lat: 40.7, lon: -74.0").is_none());
        assert!(Coordinates::parse("350 Fifth Avenue, New York").is_none());
    }

    #[test]
    fn test_validate_in_range() {
        assert!(Coordinates::new(40.7128, -74.0060).validate().is_ok());
        assert!(Coordinates::new(-90.0, 180.0).validate().is_ok());
    }

    #[test]
    fn test_validate_out_of_range() {
        assert!(Coordinates::new(90.1, 0.0).validate().is_err());
        assert!(Coordinates::new(0.0, -180.5).validate().is_err());
    }

    #[test]
    fn test_query_classifies_coordinates() {
        let query = LocationQuery::from_input("40.748817, -73.985428");
        assert_eq!(
            query,
            LocationQuery::Coords(Coordinates::new(40.748817, -73.985428))
        );
    }

    #[test]
    fn test_query_classifies_address() {
        let query = LocationQuery::from_input("350 Fifth Avenue, New York, NY 10118");
        assert_eq!(
            query,
            LocationQuery::Address("350 Fifth Avenue, New York, NY 10118".to_string())
        );
    }

    #[test]
    fn test_query_out_of_range_pair_falls_through_to_address() {
        // "95, -74" parses as two numbers but latitude is invalid, so it is
        // treated as an address query rather than an error.
        let query = LocationQuery::from_input("95, -74");
        assert_eq!(query, LocationQuery::Address("95, -74".to_string()));
    }
}
