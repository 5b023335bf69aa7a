//! Serialized results of the tiler commands.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;

use circle_tiling::{SearchCircle, TileLayers};
use geo_common::{haversine_km, BoundingBox, GeoPoint};
use polygon_ops::{Feature, FeatureCollection};

/// Output encoding for tile sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Search circles with counts and a timestamp
    Json,
    /// A FeatureCollection of tile centers
    Geojson,
}

/// Search circles for one tiled shape.
#[derive(Debug, Clone, Serialize)]
pub struct TilesReport {
    pub generated_at: DateTime<Utc>,
    pub radius_km: f64,
    pub radius_deg: f64,
    /// Great-circle length of the shape's bounding box diagonal
    pub extent_km: f64,
    pub outer_count: usize,
    pub inner_count: usize,
    pub tile_count: usize,
    pub circles: Vec<SearchCircle>,
}

impl TilesReport {
    pub fn new(layers: &TileLayers, bbox: &BoundingBox) -> Self {
        let circles = layers.search_circles();
        Self {
            generated_at: Utc::now(),
            radius_km: layers.radius_km,
            radius_deg: layers.radius_deg,
            extent_km: diagonal_km(bbox),
            outer_count: layers.outer.len(),
            inner_count: layers.inner.len(),
            tile_count: circles.len(),
            circles,
        }
    }
}

/// Per-group search circles for a whole collection.
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub generated_at: DateTime<Utc>,
    pub group_property: String,
    pub buffer_miles: f64,
    pub radius_km: f64,
    pub groups: Vec<GroupPlan>,
}

impl PlanReport {
    pub fn total_tiles(&self) -> usize {
        self.groups.iter().map(|g| g.tile_count).sum()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GroupPlan {
    /// Value of the grouping property
    pub group: String,
    /// Diagonal of the buffered group's bounding box
    pub extent_km: f64,
    pub tile_count: usize,
    pub circles: Vec<SearchCircle>,
}

/// Great-circle distance between opposite corners of `bbox`.
pub fn diagonal_km(bbox: &BoundingBox) -> f64 {
    haversine_km(
        &GeoPoint::new(bbox.lng_min, bbox.lat_min),
        &GeoPoint::new(bbox.lng_max, bbox.lat_max),
    )
}

/// Tile centers as Point features tagged `layer: outer|inner`.
///
/// Centers present in both layers are written once, as outer.
pub fn layers_to_geojson(layers: &TileLayers) -> FeatureCollection {
    let tiles = layers.union();
    let outer: circle_tiling::TileSet = layers.outer.iter().map(|p| p.normalized()).collect();

    let features = tiles
        .iter()
        .map(|center| {
            let layer = if outer.contains(&center) { "outer" } else { "inner" };
            Feature::point(center.lng, center.lat).with_property("layer", layer)
        })
        .collect();

    FeatureCollection {
        features,
        ..FeatureCollection::new()
    }
}

/// Pretty-print `value` as JSON to `path`, or to stdout when `None`.
pub fn write_json<T: Serialize>(value: &T, path: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    match path {
        Some(path) => fs::write(path, json + "\n")
            .with_context(|| format!("Failed to write output to {:?}", path)),
        None => {
            println!("{}", json);
            Ok(())
        }
    }
}
