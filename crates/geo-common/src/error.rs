//! Error types for coordinate and distance handling.

use thiserror::Error;

/// Result type alias using GeoError.
pub type GeoResult<T> = Result<T, GeoError>;

/// Errors raised while validating coordinates and distances.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Coordinate out of range: {0}")]
    OutOfRange(String),

    #[error("Unknown distance unit '{0}'. Supported units: km, mi, m")]
    UnknownUnit(String),
}
