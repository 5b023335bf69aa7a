//! Library side of the `tiler` command: configuration, the merge, buffer
//! and tile pipeline, and output encoding.

pub mod config;
pub mod output;
pub mod pipeline;

pub use config::TilerConfig;
pub use output::{layers_to_geojson, write_json, OutputFormat, PlanReport, TilesReport};
pub use pipeline::{plan, read_collection, read_shape, tile_shape};
