//! Building row structures as they move through the pipeline stages.

use geo_types::Geometry;
use serde::Deserialize;

/// Raw CSV row: coordinate columns plus the footprint encoded as WKT text.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildingRecord {
    pub latitude: f64,
    pub longitude: f64,
    /// Footprint as Well-Known Text, parsed in a later stage.
    pub geometry: String,
}

/// A building whose WKT column has been parsed into a structured shape.
#[derive(Debug, Clone)]
pub struct Building {
    pub latitude: f64,
    pub longitude: f64,
    pub geometry: Geometry<f64>,
}

/// Result of the distance scan over the filtered set.
#[derive(Debug, Clone)]
pub struct NearestBuilding {
    /// Index into the filtered building slice.
    pub index: usize,
    pub latitude: f64,
    pub longitude: f64,
    /// Footprint in the source (geographic) CRS, for drawing.
    pub geometry: Geometry<f64>,
    pub distance_meters: f64,
}
