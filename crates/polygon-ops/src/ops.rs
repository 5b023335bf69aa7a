//! Polygon algebra: merging groups of polygons and buffering.

use std::collections::HashMap;

use geo::{BooleanOps, Coord, LineString, MultiPolygon, Polygon};
use serde_json::Value;
use tracing::debug;

use geo_common::{angular_radius, miles_to_km, BoundingBox, GeoPoint};

use crate::circle::{circle_polygon, DEFAULT_CIRCLE_SEGMENTS};
use crate::error::{GeometryError, Result};
use crate::geojson::{Feature, FeatureCollection};
use crate::shape::Shape;

/// Merge features that share the same value of `group_property`.
///
/// Each group's polygons are unioned into one feature whose properties are
/// those of the group's first feature. Groups appear in order of first
/// occurrence.
pub fn merge_polygon_groups(
    collection: &FeatureCollection,
    group_property: &str,
) -> Result<FeatureCollection> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, (Feature, Vec<Shape>)> = HashMap::new();

    for (index, feature) in collection.features.iter().enumerate() {
        let key = feature
            .property(group_property)
            .filter(|v| !v.is_null())
            .map(group_key)
            .ok_or_else(|| GeometryError::MissingProperty {
                index,
                property: group_property.to_string(),
            })?;

        let shape = Shape::from_feature(feature)?;

        match groups.get_mut(&key) {
            Some((_, shapes)) => shapes.push(shape),
            None => {
                order.push(key.clone());
                groups.insert(key, (feature.clone(), vec![shape]));
            }
        }
    }

    let mut merged = FeatureCollection::new();
    for key in order {
        let Some((first, shapes)) = groups.remove(&key) else {
            continue;
        };
        let count = shapes.len();
        let shape = union_all(shapes)?;

        debug!(group = %key, polygons = count, "Merged polygon group");

        let mut feature = shape.to_feature();
        feature.id = first.id.clone();
        feature.properties = first.properties.clone();
        merged.features.push(feature);
    }

    Ok(merged)
}

/// Union a non-empty list of shapes.
fn union_all(shapes: Vec<Shape>) -> Result<Shape> {
    let mut iter = shapes.into_iter();
    let first = iter
        .next()
        .ok_or_else(|| GeometryError::malformed("cannot union an empty group"))?;

    let mut acc = first.polygons().clone();
    for shape in iter {
        acc = acc.union(shape.polygons());
    }

    Shape::from_multi_polygon(acc)
}

fn group_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Grow a shape outward by `distance` degrees, with round joins.
///
/// The result is the union of the shape with a capsule (edge rectangle
/// plus vertex circles) around every ring edge, so holes shrink as the
/// outline grows.
pub fn buffer_shape(shape: &Shape, distance: f64) -> Result<Shape> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(GeometryError::InvalidBuffer(distance));
    }
    if distance == 0.0 {
        return Ok(shape.clone());
    }

    let mut acc = shape.polygons().clone();
    for polygon in &shape.polygons().0 {
        let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors().iter());
        for ring in rings {
            for piece in ring_capsules(ring, distance) {
                acc = acc.union(&MultiPolygon(vec![piece]));
            }
        }
    }

    debug!(
        distance,
        polygons_in = shape.polygons().0.len(),
        polygons_out = acc.0.len(),
        "Buffered shape"
    );

    Shape::from_multi_polygon(acc)
}

/// Buffer by a distance in miles, converted through kilometers to degrees.
pub fn buffer_miles(shape: &Shape, miles: f64) -> Result<Shape> {
    buffer_shape(shape, angular_radius(miles_to_km(miles)))
}

/// Buffer a shape and return only the bounding box of the result.
pub fn grow_to_box(shape: &Shape, distance: f64) -> Result<BoundingBox> {
    Ok(buffer_shape(shape, distance)?.bounding_box())
}

fn ring_capsules(ring: &LineString<f64>, distance: f64) -> Vec<Polygon<f64>> {
    let mut pieces = Vec::new();

    for coord in ring.0.iter() {
        pieces.push(circle_polygon(
            &GeoPoint::new(coord.x, coord.y),
            distance,
            DEFAULT_CIRCLE_SEGMENTS,
        ));
    }

    for line in ring.lines() {
        if let Some(rect) = edge_rectangle(line.start, line.end, distance) {
            pieces.push(rect);
        }
    }

    pieces
}

fn edge_rectangle(a: Coord<f64>, b: Coord<f64>, distance: f64) -> Option<Polygon<f64>> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = dx.hypot(dy);
    if len == 0.0 {
        return None;
    }

    let nx = -dy / len * distance;
    let ny = dx / len * distance;

    Some(Polygon::new(
        LineString::from(vec![
            (a.x + nx, a.y + ny),
            (b.x + nx, b.y + ny),
            (b.x - nx, b.y - ny),
            (a.x - nx, a.y - ny),
            (a.x + nx, a.y + ny),
        ]),
        vec![],
    ))
}
