//! Error types for circle tiling.

use thiserror::Error;

use polygon_ops::GeometryError;

/// Errors that can occur while tiling a polygon.
#[derive(Error, Debug)]
pub enum TilingError {
    /// Radius is zero, negative or not finite; a grid with that spacing
    /// is undefined.
    #[error("invalid radius {0}: must be a positive, finite number")]
    InvalidRadius(f64),

    /// The polygon could not be read or is not a polygon.
    #[error(transparent)]
    MalformedGeometry(#[from] GeometryError),

    /// Configuration value out of range.
    #[error("configuration error: {0}")]
    InvalidConfig(String),
}

/// Result type for tiling operations.
pub type Result<T> = std::result::Result<T, TilingError>;

/// Reject radii for which a grid cannot be built.
pub(crate) fn validate_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(TilingError::InvalidRadius(radius));
    }
    Ok(())
}
