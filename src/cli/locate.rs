//! Locate command handler
//!
//! Resolves a query to coordinates without fetching a forecast.

use crate::config::Config;
use crate::error::Result;
use crate::geo::{get_geocoder, GeoBackend};
use clap::Args;

/// Locate command arguments
#[derive(Args)]
pub struct LocateArgs {
    /// Address or "lat, lon" pair to look up
    #[arg(conflicts_with = "here")]
    pub query: Option<String>,

    /// Use current location (IP geolocation)
    #[arg(long)]
    pub here: bool,

    /// Also look up address matches for the resolved coordinates
    #[arg(long)]
    pub reverse: bool,
}

/// Run the locate command
pub async fn run(args: LocateArgs) -> Result<()> {
    let config = Config::load()?;

    let coords =
        super::select_location(args.query.as_deref(), None, None, args.here, &config).await?;

    println!("{}", coords);

    if args.reverse {
        let geocoder = get_geocoder();
        let matches = geocoder.reverse_geocode(coords).await?;

        if matches.is_empty() {
            eprintln!("No address matches found");
        }
        for m in matches {
            if let Some(address) = m.matched_address {
                println!("{}", address);
            }
        }
    }

    Ok(())
}
