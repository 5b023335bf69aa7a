//! Common types and utilities shared across the venue-tiles workspace.

pub mod bbox;
pub mod error;
pub mod point;
pub mod units;

pub use bbox::BoundingBox;
pub use error::{GeoError, GeoResult};
pub use point::{quantize, GeoPoint, QuantizedPoint, COORD_PRECISION};
pub use units::{angular_radius, haversine_km, miles_to_km, DistanceUnit, EARTH_RADIUS_KM};
