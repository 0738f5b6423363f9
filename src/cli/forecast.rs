//! Forecast command handler
//!
//! Resolves a location and prints its multi-day forecast.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::format::{available_formats, get_formatter};
use crate::weather::nws::NwsClient;
use crate::weather::ForecastReport;
use clap::Args;

/// Forecast command arguments
#[derive(Args)]
pub struct ForecastArgs {
    /// Address or "lat, lon" pair to look up
    #[arg(conflicts_with_all = ["lat", "lon", "here"])]
    pub query: Option<String>,

    /// Latitude
    #[arg(long, requires = "lon")]
    pub lat: Option<f64>,

    /// Longitude
    #[arg(long, requires = "lat")]
    pub lon: Option<f64>,

    /// Use current location (IP geolocation)
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    pub here: bool,

    /// Output format
    #[arg(long, short = 'f')]
    pub format: Option<String>,

    /// Show the long-form forecast text
    #[arg(long, short = 'd')]
    pub detailed: bool,

    /// Write output to file
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    /// List available formats
    #[arg(short = 'F', long = "list-formats")]
    pub list_formats: bool,
}

/// Run the forecast command
pub async fn run(args: ForecastArgs) -> Result<()> {
    if args.list_formats {
        list_formats();
        return Ok(());
    }

    let config = Config::load()?;

    let coords =
        super::select_location(args.query.as_deref(), args.lat, args.lon, args.here, &config)
            .await?;

    let client = NwsClient::new(&config.weather.contact);
    let periods = client.fetch_forecast(coords).await?;

    if periods.is_empty() {
        eprintln!("No forecast periods available for ({}, {})", coords.lat, coords.lon);
    }

    let report = ForecastReport {
        location: coords,
        periods,
    };

    let format_name = args
        .format
        .unwrap_or_else(|| config.defaults.format.clone());
    let formatter = get_formatter(&format_name)
        .ok_or_else(|| Error::Config(format!("Unknown format: {}", format_name)))?;

    let output = formatter.format(&report, args.detailed)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, &output)?;
            eprintln!("Wrote forecast to {}", path);
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Print available output formats
fn list_formats() {
    println!("Available formats:");
    for info in available_formats() {
        println!("  {:8} {}", info.name, info.description);
    }
}
