//! GeoJSON types for polygon input and tile output.
//!
//! Only the subset needed here is modeled: Point, LineString, Polygon and
//! MultiPolygon geometries, Features, and FeatureCollections.
//! Positions are two-dimensional `[longitude, latitude]` pairs.
//!
//! See: <https://datatracker.ietf.org/doc/html/rfc7946>

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{GeometryError, Result};

/// Feature properties, kept as raw JSON.
pub type Properties = Map<String, Value>;

/// A GeoJSON FeatureCollection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    /// Type identifier (always "FeatureCollection").
    #[serde(rename = "type")]
    pub type_: String,

    /// Array of features.
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Create a new empty FeatureCollection.
    pub fn new() -> Self {
        Self {
            type_: "FeatureCollection".to_string(),
            features: Vec::new(),
        }
    }

    /// Add a feature to the collection.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }
}

impl Default for FeatureCollection {
    fn default() -> Self {
        Self::new()
    }
}

/// A GeoJSON Feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    /// Type identifier (always "Feature").
    #[serde(rename = "type")]
    pub type_: String,

    /// Optional feature identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    /// The geometry of this feature, `null` allowed.
    pub geometry: Option<Geometry>,

    /// Arbitrary properties, `null` allowed.
    #[serde(default)]
    pub properties: Option<Properties>,
}

impl Feature {
    /// Create a feature wrapping a geometry, with empty properties.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            type_: "Feature".to_string(),
            id: None,
            geometry: Some(geometry),
            properties: Some(Properties::new()),
        }
    }

    /// Create a new feature with a point geometry.
    pub fn point(lng: f64, lat: f64) -> Self {
        Self::new(Geometry::point(lng, lat))
    }

    /// Replace the properties.
    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Add a single property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties
            .get_or_insert_with(Properties::new)
            .insert(name.into(), value.into());
        self
    }

    /// Look up a property value.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }
}

/// GeoJSON geometry types understood by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// A point geometry.
    Point {
        /// Coordinates as [longitude, latitude].
        coordinates: [f64; 2],
    },

    /// A line string geometry.
    LineString {
        /// Array of [longitude, latitude] coordinate pairs.
        coordinates: Vec<[f64; 2]>,
    },

    /// A polygon geometry.
    Polygon {
        /// Array of linear rings (first is exterior, rest are holes).
        coordinates: Vec<Vec<[f64; 2]>>,
    },

    /// A multi-polygon geometry.
    MultiPolygon {
        /// Array of polygons, each an array of linear rings.
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
}

impl Geometry {
    /// Create a point geometry.
    pub fn point(lng: f64, lat: f64) -> Self {
        Geometry::Point {
            coordinates: [lng, lat],
        }
    }

    /// Create a polygon geometry.
    pub fn polygon(coordinates: Vec<Vec<[f64; 2]>>) -> Self {
        Geometry::Polygon { coordinates }
    }

    /// Create a multi-polygon geometry.
    pub fn multi_polygon(coordinates: Vec<Vec<Vec<[f64; 2]>>>) -> Self {
        Geometry::MultiPolygon { coordinates }
    }

    /// The GeoJSON type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::LineString { .. } => "LineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
        }
    }
}

/// Any top-level GeoJSON object accepted as input.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Geometry(Geometry),
    Feature(Feature),
    FeatureCollection(FeatureCollection),
}

impl GeoJson {
    /// Parse a GeoJSON document, dispatching on its `type` member.
    pub fn parse(s: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_value(value)
    }

    /// Interpret an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        let type_name = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| GeometryError::malformed("missing GeoJSON 'type' member"))?
            .to_string();

        match type_name.as_str() {
            "FeatureCollection" => Ok(GeoJson::FeatureCollection(serde_json::from_value(value)?)),
            "Feature" => Ok(GeoJson::Feature(serde_json::from_value(value)?)),
            "Point" | "LineString" | "Polygon" | "MultiPolygon" => {
                Ok(GeoJson::Geometry(serde_json::from_value(value)?))
            }
            "MultiPoint" | "MultiLineString" | "GeometryCollection" => {
                Err(GeometryError::UnsupportedGeometry(type_name))
            }
            other => Err(GeometryError::malformed(format!(
                "unknown GeoJSON type '{}'",
                other
            ))),
        }
    }

    /// Collect every feature, wrapping a bare geometry in a feature.
    pub fn into_features(self) -> Vec<Feature> {
        match self {
            GeoJson::Geometry(geometry) => vec![Feature::new(geometry)],
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection(collection) => collection.features,
        }
    }
}
