use anyhow::{anyhow, Result};
use geo_types::Geometry;
use wkt::TryFromWkt;

use crate::models::{Building, BuildingRecord};

/// Parse a Well-Known Text string into a geometry.
pub fn parse_wkt(text: &str) -> Result<Geometry<f64>> {
    Geometry::try_from_wkt_str(text)
        .map_err(|e| anyhow!("invalid WKT '{}': {}", text.get(..64).unwrap_or(text), e))
}

/// Replace each record's WKT column with its parsed footprint.
///
/// A malformed footprint fails the whole batch; rows with broken geometry
/// are a data-quality defect, not something to skip silently.
pub fn parse_records(records: Vec<BuildingRecord>) -> Result<Vec<Building>> {
    records
        .into_iter()
        .map(|record| {
            let geometry = parse_wkt(&record.geometry)?;
            Ok(Building {
                latitude: record.latitude,
                longitude: record.longitude,
                geometry,
            })
        })
        .collect()
}
