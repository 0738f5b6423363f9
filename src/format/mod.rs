//! Output formatters
//!
//! Provides trait-based output formatting for forecast reports.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::weather::ForecastReport;
use serde::{Deserialize, Serialize};

/// Information about an output format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatInfo {
    /// Format name
    pub name: String,
    /// Format description
    pub description: String,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a forecast report
    ///
    /// # Arguments
    /// * `report` - The forecast report to format
    /// * `detailed` - Whether to include the long-form forecast text
    fn format(&self, report: &ForecastReport, detailed: bool) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}

/// List all available formatters
pub fn available_formats() -> Vec<FormatInfo> {
    vec![
        FormatInfo {
            name: "text".to_string(),
            description: "Human-readable text".to_string(),
        },
        FormatInfo {
            name: "json".to_string(),
            description: "Full JSON report".to_string(),
        },
    ]
}
