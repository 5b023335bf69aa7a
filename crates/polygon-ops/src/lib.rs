//! Polygon primitives for venue-tiles.
//!
//! This crate owns everything that treats an area as a polygon:
//! - GeoJSON Feature/Geometry types and parsing
//! - [`Shape`], an immutable (multi)polygon with its bounding box
//! - the circle/polygon intersection predicate used by tiling
//! - merging polygons by group, buffering and growing to a box
//!
//! # Example
//!
//! ```rust
//! use geo_common::GeoPoint;
//! use polygon_ops::Shape;
//!
//! let shape = Shape::from_geojson_str(
//!     r#"{"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}"#,
//! ).unwrap();
//!
//! assert!(shape.intersects_circle(&GeoPoint::new(1.2, 0.5), 0.3));
//! assert!(!shape.intersects_circle(&GeoPoint::new(2.0, 0.5), 0.3));
//! ```

pub mod circle;
pub mod error;
pub mod geojson;
pub mod ops;
pub mod shape;

pub use circle::{circle_polygon, DEFAULT_CIRCLE_SEGMENTS};
pub use error::{GeometryError, Result};
pub use geojson::{Feature, FeatureCollection, GeoJson, Geometry};
pub use ops::{buffer_miles, buffer_shape, grow_to_box, merge_polygon_groups};
pub use shape::Shape;
