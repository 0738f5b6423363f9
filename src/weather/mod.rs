//! Weather forecast retrieval
//!
//! Wire types for the NWS gridded forecast API and the report type handed
//! to formatters and the HTTP layer.

pub mod nws;

use crate::coord::Coordinates;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One discrete forecast window (e.g. "Today", "Tonight")
///
/// Mirrors the NWS forecast period wire format; field values are passed
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPeriod {
    /// Ordinal position in the forecast
    pub number: i32,
    /// Display name for the window
    pub name: String,
    pub start_time: DateTime<FixedOffset>,
    pub end_time: DateTime<FixedOffset>,
    pub is_daytime: bool,
    /// Whole-degree temperature in `temperature_unit`
    pub temperature: i32,
    pub temperature_unit: String,
    /// Present when the temperature is rising or falling through the window
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_trend: Option<String>,
    /// Free-text speed, e.g. "5 to 10 mph"
    pub wind_speed: String,
    pub wind_direction: String,
    /// Icon URL for the conditions
    pub icon: String,
    pub short_forecast: String,
    pub detailed_forecast: String,
}

/// A resolved forecast for one location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastReport {
    pub location: Coordinates,
    pub periods: Vec<ForecastPeriod>,
}
