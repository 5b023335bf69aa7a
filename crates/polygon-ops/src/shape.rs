//! Immutable polygonal areas.

use geo::{Area, BoundingRect, Contains, Coord, Intersects, LineString, MultiPolygon, Point, Polygon};

use geo_common::{BoundingBox, GeoPoint};

use crate::circle::{circle_polygon, DEFAULT_CIRCLE_SEGMENTS};
use crate::error::{GeometryError, Result};
use crate::geojson::{Feature, GeoJson, Geometry};

/// A validated polygon or multipolygon (holes allowed) with its bounding box.
///
/// Never mutated after construction; every operation that changes the area
/// returns a new `Shape`.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    polygons: MultiPolygon<f64>,
    bbox: BoundingBox,
}

impl Shape {
    /// Parse a GeoJSON Feature or bare Polygon/MultiPolygon geometry.
    pub fn from_geojson_str(s: &str) -> Result<Self> {
        match GeoJson::parse(s)? {
            GeoJson::Geometry(geometry) => Self::from_geometry(&geometry),
            GeoJson::Feature(feature) => Self::from_feature(&feature),
            GeoJson::FeatureCollection(_) => Err(GeometryError::UnsupportedGeometry(
                "FeatureCollection (expected a single Feature or Geometry)".to_string(),
            )),
        }
    }

    /// Build a shape from a feature's geometry.
    pub fn from_feature(feature: &Feature) -> Result<Self> {
        let geometry = feature
            .geometry
            .as_ref()
            .ok_or_else(|| GeometryError::malformed("feature has a null geometry"))?;
        Self::from_geometry(geometry)
    }

    /// Build a shape from a Polygon or MultiPolygon geometry.
    pub fn from_geometry(geometry: &Geometry) -> Result<Self> {
        let polygons = match geometry {
            Geometry::Polygon { coordinates } => vec![to_polygon(coordinates)?],
            Geometry::MultiPolygon { coordinates } => {
                if coordinates.is_empty() {
                    return Err(GeometryError::malformed("MultiPolygon has no polygons"));
                }
                coordinates
                    .iter()
                    .map(|rings| to_polygon(rings))
                    .collect::<Result<Vec<_>>>()?
            }
            other => {
                return Err(GeometryError::UnsupportedGeometry(
                    other.type_name().to_string(),
                ))
            }
        };

        Self::from_multi_polygon(MultiPolygon(polygons))
    }

    /// Wrap an existing multipolygon, e.g. the output of a union.
    pub fn from_multi_polygon(polygons: MultiPolygon<f64>) -> Result<Self> {
        let rect = polygons
            .bounding_rect()
            .ok_or_else(|| GeometryError::malformed("geometry has no coordinates"))?;
        let bbox = BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)?;

        Ok(Self { polygons, bbox })
    }

    /// The minimal axis-aligned box enclosing the shape.
    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    /// The underlying multipolygon.
    pub fn polygons(&self) -> &MultiPolygon<f64> {
        &self.polygons
    }

    /// Every ring vertex, exterior and holes.
    pub fn vertices(&self) -> impl Iterator<Item = &Coord<f64>> + '_ {
        self.polygons.0.iter().flat_map(|polygon| {
            polygon
                .exterior()
                .0
                .iter()
                .chain(polygon.interiors().iter().flat_map(|ring| ring.0.iter()))
        })
    }

    /// Area in square degrees.
    pub fn area(&self) -> f64 {
        self.polygons.unsigned_area()
    }

    /// True when the point lies strictly inside the shape (not in a hole).
    pub fn contains(&self, point: &GeoPoint) -> bool {
        let point = Point::new(point.lng, point.lat);
        self.polygons.0.iter().any(|polygon| polygon.contains(&point))
    }

    /// Whether the circle of `radius` degrees around `center` shares any
    /// point with the shape, using [`DEFAULT_CIRCLE_SEGMENTS`].
    pub fn intersects_circle(&self, center: &GeoPoint, radius: f64) -> bool {
        self.intersects_circle_with(center, radius, DEFAULT_CIRCLE_SEGMENTS)
    }

    /// Circle intersection test with an explicit circle approximation.
    ///
    /// A vertex within `radius` of the center counts as a hit, which also
    /// covers shapes that have collapsed to a point or a line.
    pub fn intersects_circle_with(&self, center: &GeoPoint, radius: f64, segments: usize) -> bool {
        if self
            .vertices()
            .any(|c| (c.x - center.lng).hypot(c.y - center.lat) <= radius)
        {
            return true;
        }

        let circle = circle_polygon(center, radius, segments);
        self.polygons.0.iter().any(|polygon| polygon.intersects(&circle))
    }

    /// Convert back to a GeoJSON geometry.
    pub fn to_geometry(&self) -> Geometry {
        let mut polygons: Vec<Vec<Vec<[f64; 2]>>> =
            self.polygons.0.iter().map(from_polygon).collect();

        if polygons.len() == 1 {
            Geometry::polygon(polygons.remove(0))
        } else {
            Geometry::multi_polygon(polygons)
        }
    }

    /// Convert to a GeoJSON feature with empty properties.
    pub fn to_feature(&self) -> Feature {
        Feature::new(self.to_geometry())
    }
}

fn to_ring(positions: &[[f64; 2]]) -> Result<LineString<f64>> {
    if positions.len() < 4 {
        return Err(GeometryError::malformed(format!(
            "linear ring must have at least 4 positions, got {}",
            positions.len()
        )));
    }
    if positions.first() != positions.last() {
        return Err(GeometryError::malformed(
            "linear ring is not closed (first and last positions differ)",
        ));
    }
    for [lng, lat] in positions {
        GeoPoint::new(*lng, *lat).validate()?;
    }

    Ok(LineString::from(
        positions.iter().map(|[x, y]| (*x, *y)).collect::<Vec<_>>(),
    ))
}

fn to_polygon(rings: &[Vec<[f64; 2]>]) -> Result<Polygon<f64>> {
    let (exterior, holes) = rings
        .split_first()
        .ok_or_else(|| GeometryError::malformed("polygon has no rings"))?;

    let exterior = to_ring(exterior)?;
    let holes = holes
        .iter()
        .map(|ring| to_ring(ring))
        .collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, holes))
}

fn from_ring(ring: &LineString<f64>) -> Vec<[f64; 2]> {
    ring.0.iter().map(|c| [c.x, c.y]).collect()
}

fn from_polygon(polygon: &Polygon<f64>) -> Vec<Vec<[f64; 2]>> {
    std::iter::once(from_ring(polygon.exterior()))
        .chain(polygon.interiors().iter().map(from_ring))
        .collect()
}
