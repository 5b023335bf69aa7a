//! The set of tile centers returned by a tiling run.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use geo_common::{GeoPoint, QuantizedPoint};

/// Circle centers, unique after rounding to five decimals.
///
/// Iteration is sorted by longitude, then latitude. The order carries no
/// meaning but keeps output reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileSet {
    centers: BTreeSet<QuantizedPoint>,
}

impl TileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a center. Returns `false` if an equal center is already present.
    pub fn insert(&mut self, center: GeoPoint) -> bool {
        self.centers.insert(center.key())
    }

    pub fn contains(&self, center: &GeoPoint) -> bool {
        self.centers.contains(&center.key())
    }

    pub fn len(&self) -> usize {
        self.centers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.centers.iter().map(QuantizedPoint::to_point)
    }

    pub fn to_vec(&self) -> Vec<GeoPoint> {
        self.iter().collect()
    }

    /// One search request per tile, for an API that takes a center and a
    /// radius in meters.
    pub fn search_circles(&self, radius_km: f64) -> Vec<SearchCircle> {
        self.iter()
            .map(|center| SearchCircle::new(center, radius_km))
            .collect()
    }
}

impl FromIterator<GeoPoint> for TileSet {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        let mut set = TileSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<GeoPoint> for TileSet {
    fn extend<I: IntoIterator<Item = GeoPoint>>(&mut self, iter: I) {
        for center in iter {
            self.insert(center);
        }
    }
}

/// A tile as a radius search request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchCircle {
    pub lat: f64,
    pub lng: f64,
    /// Search radius in meters
    pub radius_m: f64,
}

impl SearchCircle {
    pub fn new(center: GeoPoint, radius_km: f64) -> Self {
        Self {
            lat: center.lat,
            lng: center.lng,
            radius_m: radius_km * 1000.0,
        }
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.lng, self.lat)
    }
}
