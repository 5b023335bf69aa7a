//! Distance units and conversions between kilometers, miles and degrees.

use crate::error::{GeoError, GeoResult};
use crate::point::GeoPoint;

/// Mean Earth radius used throughout, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per statute mile.
pub const KM_PER_MILE: f64 = 1.60934;

/// Convert miles to kilometers.
pub fn miles_to_km(miles: f64) -> f64 {
    miles * KM_PER_MILE
}

/// Angular radius, in degrees of arc, of a circle `km` kilometers across
/// the surface of a sphere with radius [`EARTH_RADIUS_KM`].
pub fn angular_radius(km: f64) -> f64 {
    (2.0 * km / EARTH_RADIUS_KM).to_degrees()
}

/// Great-circle distance between two points, in kilometers.
pub fn haversine_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance units accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
    Miles,
    Meters,
}

impl DistanceUnit {
    /// Parse a distance unit string.
    ///
    /// Accepts: "km", "kilometers", "mi", "miles", "m", "meters"
    pub fn parse(unit: &str) -> GeoResult<Self> {
        match unit.trim().to_lowercase().as_str() {
            "km" | "kilometers" | "kilometre" | "kilometres" => Ok(DistanceUnit::Kilometers),
            "mi" | "miles" | "mile" => Ok(DistanceUnit::Miles),
            "m" | "meters" | "metre" | "metres" => Ok(DistanceUnit::Meters),
            _ => Err(GeoError::UnknownUnit(unit.to_string())),
        }
    }

    /// Convert a value in this unit to kilometers.
    pub fn to_kilometers(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => value,
            DistanceUnit::Miles => miles_to_km(value),
            DistanceUnit::Meters => value / 1000.0,
        }
    }

    /// Get the string representation of this unit.
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::Meters => "m",
        }
    }
}

impl std::str::FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miles_to_km() {
        assert!((miles_to_km(1.0) - 1.60934).abs() < 1e-12);
        assert_eq!(miles_to_km(0.0), 0.0);
    }

    #[test]
    fn test_angular_radius() {
        // 40 km, the search API's maximum radius
        let deg = angular_radius(40.0);
        assert!((deg - 0.71947).abs() < 1e-4, "got {}", deg);
        assert_eq!(angular_radius(0.0), 0.0);
        assert!(angular_radius(-1.0) < 0.0);
    }

    #[test]
    fn test_haversine_known_distance() {
        let london = GeoPoint::new(-0.1278, 51.5074);
        let paris = GeoPoint::new(2.3522, 48.8566);
        let km = haversine_km(&london, &paris);
        assert!((km - 343.5).abs() < 2.0, "got {}", km);
    }

    #[test]
    fn test_haversine_same_point() {
        let p = GeoPoint::new(-87.6, 41.9);
        assert!(haversine_km(&p, &p).abs() < 1e-9);
    }

    #[test]
    fn test_unit_parse() {
        assert_eq!(DistanceUnit::parse("KM").unwrap(), DistanceUnit::Kilometers);
        assert_eq!("miles".parse::<DistanceUnit>().unwrap(), DistanceUnit::Miles);
        assert_eq!(DistanceUnit::parse(" m ").unwrap(), DistanceUnit::Meters);
        assert!(matches!(
            DistanceUnit::parse("furlongs"),
            Err(GeoError::UnknownUnit(_))
        ));
    }

    #[test]
    fn test_unit_to_kilometers() {
        assert_eq!(DistanceUnit::Meters.to_kilometers(1500.0), 1.5);
        assert!((DistanceUnit::Miles.to_kilometers(2.0) - 3.21868).abs() < 1e-9);
        assert_eq!(DistanceUnit::Kilometers.as_str(), "km");
    }
}
