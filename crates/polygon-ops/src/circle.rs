//! Polygonal approximation of circles.

use geo::{LineString, Polygon};
use std::f64::consts::PI;

use geo_common::GeoPoint;

/// Segments used to approximate a circle: 16 per quarter turn.
pub const DEFAULT_CIRCLE_SEGMENTS: usize = 64;

/// Build a regular polygon approximating the circle at `center` with
/// `radius` degrees. Vertices lie on the circle; `segments` is clamped to
/// at least 4.
pub fn circle_polygon(center: &GeoPoint, radius: f64, segments: usize) -> Polygon<f64> {
    let n = segments.max(4);
    let r = radius.abs();

    let mut coords = Vec::with_capacity(n + 1);
    for i in 0..n {
        let angle = 2.0 * PI * i as f64 / n as f64;
        coords.push((center.lng + r * angle.cos(), center.lat + r * angle.sin()));
    }
    coords.push(coords[0]);

    Polygon::new(LineString::from(coords), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::Area;

    #[test]
    fn test_circle_area() {
        let polygon = circle_polygon(&GeoPoint::new(0.0, 0.0), 10.0, 256);

        let expected_area = PI * 100.0;
        let error = (polygon.unsigned_area() - expected_area).abs() / expected_area;
        assert!(error < 0.001, "circle area error {:.4}", error);
    }

    #[test]
    fn test_circle_vertex_count() {
        let polygon = circle_polygon(&GeoPoint::new(5.0, 5.0), 1.0, 32);
        assert_eq!(polygon.exterior().0.len(), 33);
    }

    #[test]
    fn test_circle_minimum_segments() {
        let polygon = circle_polygon(&GeoPoint::new(0.0, 0.0), 1.0, 1);
        assert_eq!(polygon.exterior().0.len(), 5);
    }
}
