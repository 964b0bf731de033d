use anyhow::{Context, Result};
use geo::MapCoords;
use geo_types::{Geometry, Point};
use proj::Proj;

/// A reusable conversion between two EPSG-coded reference systems.
///
/// Axis order is normalized to lon/lat (x/y) on both sides. Converting
/// between identical systems is a no-op pipeline inside PROJ, so callers
/// never need to special-case already-projected input.
pub struct Reprojector {
    proj: Proj,
}

impl Reprojector {
    pub fn new(source_epsg: u32, target_epsg: u32) -> Result<Self> {
        let proj = Proj::new_known_crs(
            &format!("EPSG:{source_epsg}"),
            &format!("EPSG:{target_epsg}"),
            None,
        )
        .with_context(|| {
            format!("cannot build EPSG:{source_epsg} -> EPSG:{target_epsg} conversion")
        })?;
        Ok(Self { proj })
    }

    /// Transform a single point.
    pub fn point(&self, point: Point<f64>) -> Result<Point<f64>> {
        Ok(self.proj.convert(point)?)
    }

    /// Transform every coordinate of a geometry.
    pub fn geometry(&self, geometry: &Geometry<f64>) -> Result<Geometry<f64>> {
        Ok(geometry.try_map_coords(|coord| self.proj.convert(coord))?)
    }
}
