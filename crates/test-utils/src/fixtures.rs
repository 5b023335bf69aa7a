//! Common GeoJSON fixtures for tiling tests.
//!
//! Coordinates are `[longitude, latitude]` in degrees. Every polygon ring
//! is closed.

/// Unit square with corners (0,0), (1,0), (1,1), (0,1), as a bare geometry.
pub const UNIT_SQUARE: &str = r#"{
    "type": "Polygon",
    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
}"#;

/// Unit square wrapped in a Feature with properties.
pub const UNIT_SQUARE_FEATURE: &str = r#"{
    "type": "Feature",
    "id": "unit-square",
    "geometry": {
        "type": "Polygon",
        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]]
    },
    "properties": {"name": "unit square"}
}"#;

/// A concave L-shaped polygon spanning (0,0)-(2,2) with the
/// northeast quadrant removed.
pub const L_SHAPE: &str = r#"{
    "type": "Polygon",
    "coordinates": [[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 1.0], [1.0, 2.0], [0.0, 2.0], [0.0, 0.0]]]
}"#;

/// A 4x4 degree square with a 2x2 hole in its center.
pub const SQUARE_WITH_HOLE: &str = r#"{
    "type": "Polygon",
    "coordinates": [
        [[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0], [0.0, 0.0]],
        [[1.0, 1.0], [3.0, 1.0], [3.0, 3.0], [1.0, 3.0], [1.0, 1.0]]
    ]
}"#;

/// Two disjoint unit squares as a MultiPolygon.
pub const TWO_ISLANDS: &str = r#"{
    "type": "MultiPolygon",
    "coordinates": [
        [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0], [0.0, 0.0]]],
        [[[5.0, 0.0], [6.0, 0.0], [6.0, 1.0], [5.0, 1.0], [5.0, 0.0]]]
    ]
}"#;

/// A polygon collapsed to a single point at (2, 3).
pub const POINT_POLYGON: &str = r#"{
    "type": "Polygon",
    "coordinates": [[[2.0, 3.0], [2.0, 3.0], [2.0, 3.0], [2.0, 3.0]]]
}"#;

/// A polygon collapsed to a horizontal line from (0, 0) to (1, 0).
pub const LINE_POLYGON: &str = r#"{
    "type": "Polygon",
    "coordinates": [[[0.0, 0.0], [1.0, 0.0], [0.5, 0.0], [0.0, 0.0]]]
}"#;

/// A small area of downtown Chicago, roughly 0.05 x 0.04 degrees.
pub const CHICAGO_LOOP: &str = r#"{
    "type": "Feature",
    "geometry": {
        "type": "Polygon",
        "coordinates": [[
            [-87.6436, 41.8676], [-87.6176, 41.8676], [-87.6176, 41.8897],
            [-87.6300, 41.8897], [-87.6436, 41.8860], [-87.6436, 41.8676]
        ]]
    },
    "properties": {"name": "The Loop", "city": "Chicago"}
}"#;

/// Neighborhood polygons from two cities, for merge tests. The two Chicago
/// neighborhoods share an edge at longitude -87.63.
pub const NEIGHBORHOODS: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[
                [-87.66, 41.87], [-87.63, 41.87], [-87.63, 41.90], [-87.66, 41.90], [-87.66, 41.87]
            ]]},
            "properties": {"neighborhood": "West Loop", "city": "Chicago"}
        },
        {
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[
                [-87.70, 42.03], [-87.67, 42.03], [-87.67, 42.06], [-87.70, 42.06], [-87.70, 42.03]
            ]]},
            "properties": {"neighborhood": "Downtown", "city": "Evanston"}
        },
        {
            "type": "Feature",
            "geometry": {"type": "Polygon", "coordinates": [[
                [-87.63, 41.87], [-87.60, 41.87], [-87.60, 41.90], [-87.63, 41.90], [-87.63, 41.87]
            ]]},
            "properties": {"neighborhood": "Loop", "city": "Chicago"}
        }
    ]
}"#;

/// A GeometryCollection, which tiling does not accept.
pub const GEOMETRY_COLLECTION: &str = r#"{
    "type": "GeometryCollection",
    "geometries": []
}"#;
