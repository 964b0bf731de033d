//! Arg-min distance scan over projected footprints.

use geo::{Distance, Euclidean};
use geo_types::{Geometry, Point};
use tracing::debug;

/// Planar distance from each projected geometry to the projected target,
/// returning the index and distance of the closest one.
///
/// Ties keep the first-occurring index. A linear scan is enough here: the
/// candidate set is already bounded by the buffer window, so no spatial
/// index is built.
pub fn find_nearest(projected: &[Geometry<f64>], target: Point<f64>) -> Option<(usize, f64)> {
    let target = Geometry::Point(target);

    let mut best: Option<(usize, f64)> = None;
    for (index, geometry) in projected.iter().enumerate() {
        let distance = Euclidean.distance(geometry, &target);
        debug!("building {} is {:.2} m from the target", index, distance);

        match best {
            Some((_, current)) if distance >= current => {}
            _ => best = Some((index, distance)),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point_at(x: f64, y: f64) -> Geometry<f64> {
        Geometry::Point(Point::new(x, y))
    }

    #[test]
    fn test_minimum_distance_wins() {
        let buildings = vec![point_at(10.0, 0.0), point_at(0.0, 50.0), point_at(3.0, 4.0)];

        let (index, distance) = find_nearest(&buildings, Point::new(0.0, 0.0)).unwrap();
        assert_eq!(index, 2);
        assert!((distance - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_tie_keeps_first_index() {
        let buildings = vec![point_at(5.0, 0.0), point_at(0.0, 5.0)];

        let (index, _) = find_nearest(&buildings, Point::new(0.0, 0.0)).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_empty_input() {
        assert!(find_nearest(&[], Point::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_polygon_distance_is_to_boundary() {
        // A unit square 10 m away: distance is to the nearest edge, not
        // the centroid.
        let square = crate::geometry::parse_wkt(
            "POLYGON ((10 0, 11 0, 11 1, 10 1, 10 0))",
        )
        .unwrap();

        let (_, distance) = find_nearest(&[square], Point::new(0.0, 0.0)).unwrap();
        assert!((distance - 10.0).abs() < 1e-9);
    }
}
