//! Coordinate generators for building polygons and sampling areas.
//!
//! These generators create predictable, verifiable coordinates that can be
//! used across the test suite.

use std::f64::consts::PI;

/// Closed square ring with its southwest corner at (`x0`, `y0`).
pub fn square_ring(x0: f64, y0: f64, size: f64) -> Vec<[f64; 2]> {
    vec![
        [x0, y0],
        [x0 + size, y0],
        [x0 + size, y0 + size],
        [x0, y0 + size],
        [x0, y0],
    ]
}

/// Closed ring of a regular polygon with `sides` vertices.
///
/// # Example
///
/// ```
/// use test_utils::regular_polygon_ring;
///
/// let ring = regular_polygon_ring((0.0, 0.0), 1.0, 6);
/// assert_eq!(ring.len(), 7);
/// assert_eq!(ring.first(), ring.last());
/// ```
pub fn regular_polygon_ring(center: (f64, f64), radius: f64, sides: usize) -> Vec<[f64; 2]> {
    let n = sides.max(3);
    let mut ring: Vec<[f64; 2]> = (0..n)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / n as f64;
            [center.0 + radius * angle.cos(), center.1 + radius * angle.sin()]
        })
        .collect();
    ring.push(ring[0]);
    ring
}

/// GeoJSON text for a single-ring polygon.
pub fn polygon_geojson(ring: &[[f64; 2]]) -> String {
    let coords: Vec<String> = ring
        .iter()
        .map(|[x, y]| format!("[{}, {}]", x, y))
        .collect();
    format!(
        r#"{{"type": "Polygon", "coordinates": [[{}]]}}"#,
        coords.join(", ")
    )
}

/// A dense grid of sample points over a box, `steps` + 1 per axis,
/// edges included.
///
/// # Example
///
/// ```
/// use test_utils::sample_grid;
///
/// let points = sample_grid((0.0, 0.0, 1.0, 1.0), 10);
/// assert_eq!(points.len(), 121);
/// assert_eq!(points[0], (0.0, 0.0));
/// ```
pub fn sample_grid(bbox: (f64, f64, f64, f64), steps: usize) -> Vec<(f64, f64)> {
    let (min_x, min_y, max_x, max_y) = bbox;
    let steps = steps.max(1);
    let dx = (max_x - min_x) / steps as f64;
    let dy = (max_y - min_y) / steps as f64;

    let mut points = Vec::with_capacity((steps + 1) * (steps + 1));
    for i in 0..=steps {
        for j in 0..=steps {
            points.push((min_x + i as f64 * dx, min_y + j as f64 * dy));
        }
    }
    points
}

/// Whether `point` lies within `radius` (planar degrees) of any center.
pub fn is_covered(point: (f64, f64), centers: &[(f64, f64)], radius: f64) -> bool {
    centers
        .iter()
        .any(|c| (c.0 - point.0).hypot(c.1 - point.1) <= radius)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_ring_closed() {
        let ring = square_ring(1.0, 2.0, 3.0);
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[2], [4.0, 5.0]);
    }

    #[test]
    fn test_polygon_geojson() {
        let json = polygon_geojson(&square_ring(0.0, 0.0, 1.0));
        assert!(json.starts_with(r#"{"type": "Polygon""#));
        assert!(json.contains("[1, 1]"));
    }

    #[test]
    fn test_sample_grid_bounds() {
        let points = sample_grid((-1.0, -1.0, 1.0, 1.0), 4);
        assert_eq!(points.len(), 25);
        assert_eq!(points[0], (-1.0, -1.0));
        assert_eq!(points[24], (1.0, 1.0));
    }

    #[test]
    fn test_is_covered() {
        let centers = [(0.0, 0.0), (2.0, 0.0)];
        assert!(is_covered((0.5, 0.0), &centers, 0.5));
        assert!(!is_covered((1.0, 0.0), &centers, 0.5));
    }
}
