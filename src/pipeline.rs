//! The end-to-end locate pipeline.
//!
//! Load -> window filter -> parse WKT -> overview map -> reproject ->
//! nearest scan -> highlight map. Stages are sequential and synchronous;
//! a failure at any stage leaves no later output behind.

use std::path::PathBuf;

use anyhow::{Context, Result};
use geo_types::Point;
use tracing::info;

use crate::dataset::{filter_records, load_buildings, BufferWindow};
use crate::geometry::{parse_records, Reprojector};
use crate::map::build_map;
use crate::models::NearestBuilding;
use crate::nearest::find_nearest;

/// Geographic CRS of the input dataset.
pub const SOURCE_EPSG: u32 = 4326;

/// Everything the pipeline needs, passed explicitly instead of living in
/// module globals.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub input: PathBuf,

    /// Target longitude in degrees.
    pub target_lon: f64,

    /// Target latitude in degrees.
    pub target_lat: f64,

    /// Half-width of the buffer window, in degrees.
    pub buffer_degrees: f64,

    /// Projected (metric) CRS used for distance computation.
    pub target_epsg: u32,

    /// Overview map, written before any distance is known.
    pub overview_output: PathBuf,

    /// Final map with the nearest building highlighted.
    pub final_output: PathBuf,
}

/// What the run produced, for logging and assertions.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub total_records: usize,
    pub filtered_records: usize,
    pub nearest: NearestBuilding,
}

pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    let target = Point::new(config.target_lon, config.target_lat);
    let window = BufferWindow::around(target, config.buffer_degrees);

    let records = load_buildings(&config.input)?;
    let total_records = records.len();

    let filtered = filter_records(records, &window);
    info!(
        "{} of {} records fall inside the buffer window",
        filtered.len(),
        total_records
    );

    let buildings = parse_records(filtered)?;
    let filtered_records = buildings.len();

    // Overview pass, before the distance scan.
    build_map(&buildings, target, &window, None).save(&config.overview_output)?;

    let reprojector = Reprojector::new(SOURCE_EPSG, config.target_epsg)?;
    let projected = buildings
        .iter()
        .map(|building| reprojector.geometry(&building.geometry))
        .collect::<Result<Vec<_>>>()?;
    let projected_target = reprojector.point(target)?;

    let (index, distance_meters) = find_nearest(&projected, projected_target)
        .context("no buildings inside the buffer window")?;

    let closest = &buildings[index];
    let nearest = NearestBuilding {
        index,
        latitude: closest.latitude,
        longitude: closest.longitude,
        geometry: closest.geometry.clone(),
        distance_meters,
    };
    info!("Closest building: #{} at {:.2} m", index, distance_meters);

    // Highlight pass.
    build_map(&buildings, target, &window, Some(&nearest)).save(&config.final_output)?;

    Ok(PipelineSummary {
        total_records,
        filtered_records,
        nearest,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetError;
    use std::fs;
    use std::io::Write;
    use std::path::Path;

    fn write_sample_csv(path: &Path) {
        let mut file = fs::File::create(path).unwrap();
        writeln!(file, "latitude,longitude,geometry").unwrap();
        // Inside the buffer window around the target.
        writeln!(
            file,
            "-22.951,-43.2105,\"POLYGON ((-43.2106 -22.9512, -43.2104 -22.9512, -43.2104 -22.951, -43.2106 -22.951, -43.2106 -22.9512))\""
        )
        .unwrap();
        // Well outside.
        writeln!(
            file,
            "-23.5,-43.9,\"POLYGON ((-43.91 -23.51, -43.89 -23.51, -43.89 -23.49, -43.91 -23.49, -43.91 -23.51))\""
        )
        .unwrap();
    }

    fn config_in(dir: &Path) -> PipelineConfig {
        PipelineConfig {
            input: dir.join("buildings.csv"),
            target_lon: -43.21052677661779,
            target_lat: -22.95183796600185,
            buffer_degrees: 0.01,
            target_epsg: 31983,
            overview_output: dir.join("first_map.html"),
            final_output: dir.join("final_map.html"),
        }
    }

    #[test]
    fn test_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());
        write_sample_csv(&config.input);

        let summary = run(&config).unwrap();

        assert_eq!(summary.total_records, 2);
        assert_eq!(summary.filtered_records, 1);
        assert_eq!(summary.nearest.index, 0);
        // The footprint sits well under a kilometre from the target.
        assert!(summary.nearest.distance_meters > 0.0);
        assert!(summary.nearest.distance_meters < 1_000.0);

        let overview = fs::read_to_string(&config.overview_output).unwrap();
        assert_eq!(overview.matches("Building #").count(), 1);

        let final_map = fs::read_to_string(&config.final_output).unwrap();
        assert!(final_map.contains("Distance:"));
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_in(dir.path());

        let err = run(&config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DatasetError>(),
            Some(DatasetError::FileNotFound(_))
        ));

        assert!(!config.overview_output.exists());
        assert!(!config.final_output.exists());
    }
}
