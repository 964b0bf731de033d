use geo_types::{polygon, Point, Polygon};
use tracing::debug;

use crate::models::BuildingRecord;

/// Rectangular lat/lon window around a target point.
///
/// Bounds follow a half-open convention: the lower bound is inclusive and
/// the upper bound exclusive, so two windows sharing an edge never claim
/// the same row twice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BufferWindow {
    pub min_lon: f64,
    pub max_lon: f64,
    pub min_lat: f64,
    pub max_lat: f64,
}

impl BufferWindow {
    /// Build a window centred on `target` (lon/lat point), extending
    /// `offset_degrees` in every direction.
    pub fn around(target: Point<f64>, offset_degrees: f64) -> Self {
        Self {
            min_lon: target.x() - offset_degrees,
            max_lon: target.x() + offset_degrees,
            min_lat: target.y() - offset_degrees,
            max_lat: target.y() + offset_degrees,
        }
    }

    /// Half-open containment test: `min <= value < max` on both axes.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        self.min_lat <= latitude
            && latitude < self.max_lat
            && self.min_lon <= longitude
            && longitude < self.max_lon
    }

    /// The window outline as a closed polygon, for drawing.
    pub fn to_polygon(&self) -> Polygon<f64> {
        polygon![
            (x: self.min_lon, y: self.min_lat),
            (x: self.min_lon, y: self.max_lat),
            (x: self.max_lon, y: self.max_lat),
            (x: self.max_lon, y: self.min_lat),
        ]
    }
}

/// Keep only the records whose coordinate columns fall inside the window.
///
/// This filters on the raw lat/lon columns, not on the footprint extent, so
/// a building straddling the window edge is kept or dropped by its anchor
/// coordinate alone.
pub fn filter_records(records: Vec<BuildingRecord>, window: &BufferWindow) -> Vec<BuildingRecord> {
    let total = records.len();

    let kept: Vec<BuildingRecord> = records
        .into_iter()
        .filter(|r| window.contains(r.latitude, r.longitude))
        .collect();

    debug!("Window filter kept {}/{} records", kept.len(), total);
    kept
}
