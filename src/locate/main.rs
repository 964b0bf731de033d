//! Nearest-building locator.
//!
//! Loads a building CSV, filters it to a window around the target
//! coordinate, finds the closest footprint in a metric CRS and writes an
//! overview map plus a highlight map.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use corcovado::pipeline::{run, PipelineConfig};

#[derive(Parser, Debug)]
#[command(name = "locate")]
#[command(about = "Find the building closest to a target coordinate")]
struct Args {
    /// Building CSV with latitude, longitude and geometry (WKT) columns
    #[arg(short, long, default_value = "009_buildings.csv")]
    file: PathBuf,

    /// Target longitude in degrees
    #[arg(long, default_value = "-43.21052677661779", allow_hyphen_values = true)]
    lon: f64,

    /// Target latitude in degrees
    #[arg(long, default_value = "-22.95183796600185", allow_hyphen_values = true)]
    lat: f64,

    /// Buffer window half-width in degrees (0.01 is roughly 1 km here)
    #[arg(long, default_value = "0.01")]
    buffer: f64,

    /// Projected CRS used for metric distances
    #[arg(long, default_value = "31983")]
    epsg: u32,

    /// Overview map output path
    #[arg(long, default_value = "first_map.html")]
    overview: PathBuf,

    /// Final map output path, with the nearest building highlighted
    #[arg(short, long, default_value = "final_map.html")]
    output: PathBuf,
}

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    info!("Corcovado nearest-building locator");
    info!("Input: {}", args.file.display());

    let config = PipelineConfig {
        input: args.file,
        target_lon: args.lon,
        target_lat: args.lat,
        buffer_degrees: args.buffer,
        target_epsg: args.epsg,
        overview_output: args.overview,
        final_output: args.output,
    };

    let summary = run(&config)?;

    info!(
        "Closest building: #{} at {:.2} m from the target",
        summary.nearest.index, summary.nearest.distance_meters
    );
    info!(
        "Maps written to {} and {}",
        config.overview_output.display(),
        config.final_output.display()
    );

    Ok(())
}
