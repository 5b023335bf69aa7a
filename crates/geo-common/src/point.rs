//! Geographic points and fixed-precision coordinate keys.

use serde::{Deserialize, Serialize};

use crate::error::{GeoError, GeoResult};

/// Number of decimal places coordinates are rounded to before any
/// equality or set-membership test.
pub const COORD_PRECISION: i32 = 5;

const SCALE: f64 = 100_000.0;

/// Round a coordinate to [`COORD_PRECISION`] decimals, as a scaled integer.
pub fn quantize(value: f64) -> i64 {
    (value * SCALE).round() as i64
}

/// A (longitude, latitude) pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lng: f64,
    pub lat: f64,
}

impl GeoPoint {
    pub fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Validate that both components are finite and in geographic range.
    pub fn validate(&self) -> GeoResult<()> {
        if !self.lng.is_finite() || !self.lat.is_finite() {
            return Err(GeoError::InvalidCoordinate(format!(
                "({}, {}) is not finite",
                self.lng, self.lat
            )));
        }
        if !(-180.0..=180.0).contains(&self.lng) {
            return Err(GeoError::OutOfRange(format!(
                "Longitude {} must be between -180 and 180",
                self.lng
            )));
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeoError::OutOfRange(format!(
                "Latitude {} must be between -90 and 90",
                self.lat
            )));
        }
        Ok(())
    }

    /// The fixed-precision key used for equality between coordinates.
    pub fn key(&self) -> QuantizedPoint {
        QuantizedPoint {
            lng: quantize(self.lng),
            lat: quantize(self.lat),
        }
    }

    /// Wrap longitude into [-180, 180] and clamp latitude into [-90, 90].
    pub fn normalized(&self) -> Self {
        let mut lng = self.lng;
        while lng > 180.0 {
            lng -= 360.0;
        }
        while lng < -180.0 {
            lng += 360.0;
        }
        Self {
            lng,
            lat: self.lat.clamp(-90.0, 90.0),
        }
    }

    /// Planar distance in degrees.
    pub fn planar_distance(&self, other: &GeoPoint) -> f64 {
        (self.lng - other.lng).hypot(self.lat - other.lat)
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((lng, lat): (f64, f64)) -> Self {
        Self { lng, lat }
    }
}

impl From<GeoPoint> for (f64, f64) {
    fn from(p: GeoPoint) -> Self {
        (p.lng, p.lat)
    }
}

/// A coordinate pair rounded to [`COORD_PRECISION`] decimals and stored as
/// scaled integers, so it can be hashed, ordered and compared exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuantizedPoint {
    pub lng: i64,
    pub lat: i64,
}

impl QuantizedPoint {
    pub fn new(lng: i64, lat: i64) -> Self {
        Self { lng, lat }
    }

    /// Shift by a quantized offset in each axis.
    pub fn offset(&self, d_lng: i64, d_lat: i64) -> Self {
        Self {
            lng: self.lng + d_lng,
            lat: self.lat + d_lat,
        }
    }

    /// Back to degrees.
    pub fn to_point(&self) -> GeoPoint {
        GeoPoint {
            lng: self.lng as f64 / SCALE,
            lat: self.lat as f64 / SCALE,
        }
    }
}
