//! CLI command handlers
//!
//! Each subcommand has its own module with handler functions.

pub mod config;
pub mod forecast;
pub mod locate;
pub mod serve;

use crate::config::Config;
use crate::coord::Coordinates;
use crate::error::{Error, Result};
use crate::geo::{get_geocoder, get_ip_locator, resolve_location};
use clap::{Parser, Subcommand};

/// Location search and multi-day weather forecasts
#[derive(Parser)]
#[command(name = "geo-weather")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the forecast for an address, coordinates, or your location
    Forecast(forecast::ForecastArgs),

    /// Resolve a query to coordinates
    Locate(locate::LocateArgs),

    /// Start web server (foreground)
    Serve(serve::ServeArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

/// Run the CLI
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Forecast(args) => forecast::run(args).await,
        Commands::Locate(args) => locate::run(args).await,
        Commands::Serve(args) => serve::run(args).await,
        Commands::Config(args) => config::run(args),
    }
}

/// Pick the search location for a command
///
/// Precedence: --here, then the free-text query (coordinate fast path
/// included), then --lat/--lon, then the configured default.
pub(crate) async fn select_location(
    query: Option<&str>,
    lat: Option<f64>,
    lon: Option<f64>,
    here: bool,
    config: &Config,
) -> Result<Coordinates> {
    if here {
        return locate_here().await;
    }

    if let Some(query) = query {
        let geocoder = get_geocoder();
        return resolve_location(&geocoder, query).await;
    }

    if let (Some(lat), Some(lon)) = (lat, lon) {
        let coords = Coordinates::new(lat, lon);
        coords.validate()?;
        return Ok(coords);
    }

    if config.location.default_here {
        return locate_here().await;
    }

    Err(Error::Config(
        "No location given: pass a query, --lat/--lon, or --here".to_string(),
    ))
}

async fn locate_here() -> Result<Coordinates> {
    let locator = get_ip_locator();
    let fix = locator.locate().await?;
    eprintln!("Using current location: {}", fix.display_name);
    Ok(fix.coords)
}
