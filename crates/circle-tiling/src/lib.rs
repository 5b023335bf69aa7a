//! Cover a polygon with overlapping circles of one fixed radius.
//!
//! A radius search API queried once per circle then sees the whole
//! polygon. Tiling runs in two phases:
//!
//! 1. **Outer tiles**: a grid of centers spaced `2r` apart, anchored at the
//!    northwest corner of the polygon's bounding box, keeping only circles
//!    that intersect the polygon.
//! 2. **Inner tiles**: one extra center in the middle of every complete
//!    2x2 square of outer tiles, covering the diamond the four circles
//!    leave open.
//!
//! The union of both, deduplicated at five decimals, is the [`TileSet`].
//! All geometry is planar in degrees of longitude and latitude.
//!
//! # Example
//!
//! ```
//! use circle_tiling::{build_all_tiles, Shape};
//!
//! let square = r#"{"type": "Polygon", "coordinates":
//!     [[[0.0, 0.0], [0.5, 0.0], [0.5, 0.5], [0.0, 0.5], [0.0, 0.0]]]}"#;
//! let shape = Shape::from_geojson_str(square).unwrap();
//!
//! let tiles = build_all_tiles(&shape, 10.0).unwrap();
//! assert!(!tiles.is_empty());
//! ```
//!
//! Gap filling only recognizes complete squares. Where an irregular
//! boundary leaves three outer tiles around a gap, the gap stays open.

pub mod builder;
pub mod config;
pub mod counter;
pub mod error;
pub mod inner;
pub mod outer;
pub mod tile_set;

pub use builder::{build_all_tiles, TileLayers, TileSetBuilder};
pub use config::{TilingConfig, DEFAULT_RADIUS_KM};
pub use counter::{count_tiles, GridSize};
pub use error::{Result, TilingError};
pub use inner::{inner_tiles, inner_tiles_par};
pub use outer::{outer_tiles, outer_tiles_par, outer_tiles_with};
pub use tile_set::{SearchCircle, TileSet};

pub use geo_common::{BoundingBox, GeoPoint};
pub use polygon_ops::Shape;
