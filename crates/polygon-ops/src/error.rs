//! Error types for polygon handling.

use thiserror::Error;

use geo_common::GeoError;

/// Errors that can occur while reading or transforming polygons.
#[derive(Error, Debug)]
pub enum GeometryError {
    /// The input is not a valid polygon or multipolygon.
    #[error("malformed geometry: {0}")]
    MalformedGeometry(String),

    /// The GeoJSON object is well formed but not a polygonal type.
    #[error("unsupported geometry type: {0}")]
    UnsupportedGeometry(String),

    /// A feature lacks the property used for grouping.
    #[error("feature {index} has no property '{property}'")]
    MissingProperty { index: usize, property: String },

    /// Buffer distance is negative or not finite.
    #[error("invalid buffer distance: {0}")]
    InvalidBuffer(f64),

    /// JSON parse/serialize failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeometryError {
    /// Create a MalformedGeometry error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedGeometry(msg.into())
    }
}

impl From<GeoError> for GeometryError {
    fn from(err: GeoError) -> Self {
        Self::MalformedGeometry(err.to_string())
    }
}

/// Result type for polygon operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
