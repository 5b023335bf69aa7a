//! Bounding box types and operations.

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};
use crate::point::GeoPoint;

/// An axis-aligned geographic bounding box, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub lng_min: f64,
    pub lat_min: f64,
    pub lng_max: f64,
    pub lat_max: f64,
}

impl BoundingBox {
    /// Create a bounding box from its corner coordinates.
    ///
    /// Fails if a minimum exceeds its maximum or a value is not finite.
    pub fn new(lng_min: f64, lat_min: f64, lng_max: f64, lat_max: f64) -> GeoResult<Self> {
        let values = [lng_min, lat_min, lng_max, lat_max];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(GeoError::InvalidCoordinate(format!(
                "bounding box {:?} has non-finite values",
                values
            )));
        }
        if lng_min > lng_max || lat_min > lat_max {
            return Err(GeoError::InvalidCoordinate(format!(
                "bounding box min exceeds max: ({}, {}, {}, {})",
                lng_min, lat_min, lng_max, lat_max
            )));
        }

        Ok(Self {
            lng_min,
            lat_min,
            lng_max,
            lat_max,
        })
    }

    /// Smallest box enclosing every point, or `None` for an empty iterator.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;

        let mut bbox = Self {
            lng_min: first.lng,
            lat_min: first.lat,
            lng_max: first.lng,
            lat_max: first.lat,
        };
        for p in iter {
            bbox.lng_min = bbox.lng_min.min(p.lng);
            bbox.lng_max = bbox.lng_max.max(p.lng);
            bbox.lat_min = bbox.lat_min.min(p.lat);
            bbox.lat_max = bbox.lat_max.max(p.lat);
        }
        Some(bbox)
    }

    /// Width in degrees of longitude.
    pub fn width(&self) -> f64 {
        (self.lng_min - self.lng_max).abs()
    }

    /// Height in degrees of latitude.
    pub fn height(&self) -> f64 {
        (self.lat_min - self.lat_max).abs()
    }

    /// Width and height, in that order.
    pub fn dimensions(&self) -> (f64, f64) {
        (self.width(), self.height())
    }

    /// True when the box has zero width or zero height (a point or a line).
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// The northwest corner, where tile grids are anchored.
    pub fn north_west(&self) -> GeoPoint {
        GeoPoint::new(self.lng_min, self.lat_max)
    }

    /// Geometric center of the box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.lng_min + self.lng_max) / 2.0,
            (self.lat_min + self.lat_max) / 2.0,
        )
    }

    /// Check if a point is contained within this bbox (edges inclusive).
    pub fn contains_point(&self, point: &GeoPoint) -> bool {
        point.lng >= self.lng_min
            && point.lng <= self.lng_max
            && point.lat >= self.lat_min
            && point.lat <= self.lat_max
    }

    /// Grow the box by `distance` degrees on every side.
    pub fn expand(&self, distance: f64) -> Self {
        Self {
            lng_min: self.lng_min - distance,
            lat_min: self.lat_min - distance,
            lng_max: self.lng_max + distance,
            lat_max: self.lat_max + distance,
        }
    }

    /// Corners as `[lng_min, lat_min, lng_max, lat_max]`, the GeoJSON `bbox` order.
    pub fn to_array(&self) -> [f64; 4] {
        [self.lng_min, self.lat_min, self.lng_max, self.lat_max]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_inverted() {
        assert!(BoundingBox::new(10.0, 0.0, 5.0, 1.0).is_err());
        assert!(BoundingBox::new(0.0, 10.0, 1.0, 5.0).is_err());
        assert!(BoundingBox::new(0.0, 0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_from_points() {
        let bbox = BoundingBox::from_points(vec![
            GeoPoint::new(-100.0, 35.0),
            GeoPoint::new(-98.0, 35.0),
            GeoPoint::new(-98.0, 37.0),
            GeoPoint::new(-100.0, 37.0),
        ])
        .unwrap();

        assert_eq!(bbox.lng_min, -100.0);
        assert_eq!(bbox.lng_max, -98.0);
        assert_eq!(bbox.lat_min, 35.0);
        assert_eq!(bbox.lat_max, 37.0);
        assert!(BoundingBox::from_points(Vec::new()).is_none());
    }

    #[test]
    fn test_dimensions_and_anchor() {
        let bbox = BoundingBox::new(0.0, 0.0, 2.0, 1.0).unwrap();
        assert_eq!(bbox.dimensions(), (2.0, 1.0));
        assert_eq!(bbox.north_west(), GeoPoint::new(0.0, 1.0));
        assert!(!bbox.is_degenerate());
    }

    #[test]
    fn test_degenerate() {
        let point = BoundingBox::new(3.0, 4.0, 3.0, 4.0).unwrap();
        assert!(point.is_degenerate());
        assert_eq!(point.dimensions(), (0.0, 0.0));

        let line = BoundingBox::new(3.0, 4.0, 5.0, 4.0).unwrap();
        assert!(line.is_degenerate());
    }
}
