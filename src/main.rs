//! geo-weather CLI entry point
//!
//! Location search and weather forecasts - CLI + web app

use geo_weather::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
