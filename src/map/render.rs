use geo_types::{Geometry, Point, Polygon};

use crate::dataset::BufferWindow;
use crate::models::{Building, NearestBuilding};

use super::document::MapDocument;

/// Assemble the output map: a star on the target, the translucent buffer
/// rectangle and one polygon per filtered building.
///
/// With a highlight, also draw the nearest building's own marker and
/// footprint plus a line back to the target labelled with the computed
/// distance.
pub fn build_map(
    buildings: &[Building],
    target: Point<f64>,
    window: &BufferWindow,
    highlight: Option<&NearestBuilding>,
) -> MapDocument {
    let mut doc = MapDocument::new("Buildings near target", target.y(), target.x(), 15);

    doc.add_marker(target.y(), target.x(), "red", "★", Some("Target".to_string()));

    doc.add_polygon(
        ring_lat_lon(&window.to_polygon()),
        "blue",
        "blue",
        0.3,
        Some("Buffer zone".to_string()),
    );

    for (index, building) in buildings.iter().enumerate() {
        if let Geometry::Polygon(footprint) = &building.geometry {
            doc.add_polygon(
                ring_lat_lon(footprint),
                "blue",
                "black",
                0.3,
                Some(format!("Building #{index}")),
            );
        }
    }

    if let Some(nearest) = highlight {
        doc.add_marker(
            nearest.latitude,
            nearest.longitude,
            "blue",
            "ℹ",
            Some("Closest building".to_string()),
        );

        if let Geometry::Polygon(footprint) = &nearest.geometry {
            doc.add_polygon(ring_lat_lon(footprint), "black", "blue", 0.3, None);
        }

        doc.add_polyline(
            vec![
                [target.y(), target.x()],
                [nearest.latitude, nearest.longitude],
            ],
            "green",
            2.5,
            0.8,
            Some(format!("Distance: {:.2} m", nearest.distance_meters)),
        );
    }

    doc
}

/// Exterior ring as [lat, lon] pairs for the rendering library.
fn ring_lat_lon(polygon: &Polygon<f64>) -> Vec<[f64; 2]> {
    polygon.exterior().coords().map(|c| [c.y, c.x]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::parse_wkt;

    fn sample_building() -> Building {
        Building {
            latitude: -22.951,
            longitude: -43.2105,
            geometry: parse_wkt(
                "POLYGON ((-43.2106 -22.9512, -43.2104 -22.9512, -43.2104 -22.951, -43.2106 -22.951, -43.2106 -22.9512))",
            )
            .unwrap(),
        }
    }

    #[test]
    fn test_overview_map_layers() {
        let target = Point::new(-43.21052677661779, -22.95183796600185);
        let window = BufferWindow::around(target, 0.01);
        let buildings = vec![sample_building()];

        let doc = build_map(&buildings, target, &window, None);

        // One building polygon plus the buffer rectangle.
        assert_eq!(doc.polygon_count(), buildings.len() + 1);

        let html = doc.render().unwrap();
        assert!(html.contains("Building #0"));
        assert!(!html.contains("Distance:"));
    }

    #[test]
    fn test_highlight_adds_nearest_layers() {
        let target = Point::new(-43.21052677661779, -22.95183796600185);
        let window = BufferWindow::around(target, 0.01);
        let buildings = vec![sample_building()];
        let nearest = NearestBuilding {
            index: 0,
            latitude: buildings[0].latitude,
            longitude: buildings[0].longitude,
            geometry: buildings[0].geometry.clone(),
            distance_meters: 123.45,
        };

        let doc = build_map(&buildings, target, &window, Some(&nearest));

        // Buffer + building + highlighted footprint.
        assert_eq!(doc.polygon_count(), 3);

        let html = doc.render().unwrap();
        assert!(html.contains("Closest building"));
        assert!(html.contains("Distance: 123.45 m"));
    }

    #[test]
    fn test_point_footprints_are_not_drawn_as_polygons() {
        let target = Point::new(0.0, 0.0);
        let window = BufferWindow::around(target, 0.01);
        let buildings = vec![Building {
            latitude: 0.0,
            longitude: 0.0,
            geometry: parse_wkt("POINT (0 0)").unwrap(),
        }];

        let doc = build_map(&buildings, target, &window, None);
        // Only the buffer rectangle remains.
        assert_eq!(doc.polygon_count(), 1);
    }
}
