//! The steps behind each tiler command.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use circle_tiling::{TileLayers, TileSetBuilder, TilingConfig};
use polygon_ops::{buffer_miles, merge_polygon_groups, FeatureCollection, GeoJson, Shape};

use crate::config::TilerConfig;
use crate::output::{diagonal_km, GroupPlan, PlanReport};

/// Read a single Polygon or MultiPolygon, bare or wrapped in a Feature.
pub fn read_shape(path: &Path) -> Result<Shape> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read GeoJSON from {:?}", path))?;
    Shape::from_geojson_str(&content).with_context(|| format!("Invalid shape in {:?}", path))
}

/// Read any GeoJSON document as a collection of features.
pub fn read_collection(path: &Path) -> Result<FeatureCollection> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read GeoJSON from {:?}", path))?;
    let geojson = GeoJson::parse(&content).with_context(|| format!("Invalid GeoJSON in {:?}", path))?;

    Ok(FeatureCollection {
        features: geojson.into_features(),
        ..FeatureCollection::new()
    })
}

/// Outer and inner tiles for one shape.
pub fn tile_shape(shape: &Shape, config: &TilingConfig) -> Result<TileLayers> {
    let builder = TileSetBuilder::new(config.clone())?;
    let layers = builder.build_layers(shape)?;
    Ok(layers)
}

/// Merge, buffer and tile every group in `collection`.
pub fn plan(collection: &FeatureCollection, config: &TilerConfig) -> Result<PlanReport> {
    let merged = merge_polygon_groups(collection, &config.group_property)?;
    info!(
        features = collection.features.len(),
        groups = merged.features.len(),
        property = %config.group_property,
        "Merged polygons"
    );

    let builder = TileSetBuilder::new(config.tiling.clone())?;
    let mut groups = Vec::with_capacity(merged.features.len());

    for feature in &merged.features {
        let group = feature
            .property(&config.group_property)
            .map(|v| match v.as_str() {
                Some(s) => s.to_string(),
                None => v.to_string(),
            })
            .unwrap_or_default();

        let shape = Shape::from_feature(feature)?;
        let shape = buffer_miles(&shape, config.buffer_miles)
            .with_context(|| format!("Failed to buffer group '{}'", group))?;

        let tiles = builder.build_layers(&shape)?.union();
        if tiles.is_empty() {
            warn!(group = %group, "Group produced no tiles");
        }
        info!(group = %group, tiles = tiles.len(), "Planned group");

        groups.push(GroupPlan {
            group,
            extent_km: diagonal_km(&shape.bounding_box()),
            tile_count: tiles.len(),
            circles: tiles.search_circles(config.tiling.radius_km),
        });
    }

    Ok(PlanReport {
        generated_at: Utc::now(),
        group_property: config.group_property.clone(),
        buffer_miles: config.buffer_miles,
        radius_km: config.tiling.radius_km,
        groups,
    })
}
