//! Human-readable text output formatter

use crate::error::Result;
use crate::format::OutputFormatter;
use crate::weather::ForecastReport;

/// Text formatter - outputs a human-readable period listing
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, report: &ForecastReport, detailed: bool) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!(
            "Forecast for ({:.4}, {:.4}) - {} periods\n\n",
            report.location.lat,
            report.location.lon,
            report.periods.len()
        ));

        for period in &report.periods {
            let trend = period
                .temperature_trend
                .as_deref()
                .map(|t| format!(" and {}", t))
                .unwrap_or_default();

            output.push_str(&format!(
                "{}: {}\u{00b0}{}{}\n",
                period.name, period.temperature, period.temperature_unit, trend
            ));
            output.push_str(&format!(
                "  Wind: {} {}\n",
                period.wind_direction, period.wind_speed
            ));

            if detailed {
                output.push_str(&format!("  {}\n", period.detailed_forecast));
            } else {
                output.push_str(&format!("  {}\n", period.short_forecast));
            }
            output.push('\n');
        }

        Ok(output)
    }
}
