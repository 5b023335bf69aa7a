//! Orchestration: kilometers in, deduplicated tile centers out.

use tracing::{debug, warn};

use geo_common::{angular_radius, GeoPoint};
use polygon_ops::Shape;

use crate::config::TilingConfig;
use crate::error::{validate_radius, Result};
use crate::inner::{inner_tiles, inner_tiles_par};
use crate::outer::{outer_tiles_par, outer_tiles_with};
use crate::tile_set::{SearchCircle, TileSet};

/// Builds tile sets for shapes according to a [`TilingConfig`].
#[derive(Debug, Clone, Default)]
pub struct TileSetBuilder {
    config: TilingConfig,
}

impl TileSetBuilder {
    pub fn new(config: TilingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    /// Outer and inner tiles for `shape` at the configured radius.
    pub fn build_layers(&self, shape: &Shape) -> Result<TileLayers> {
        self.build_layers_km(shape, self.config.radius_km)
    }

    /// Outer and inner tiles for `shape` at `radius_km`.
    pub fn build_layers_km(&self, shape: &Shape, radius_km: f64) -> Result<TileLayers> {
        validate_radius(radius_km)?;
        let radius_deg = angular_radius(radius_km);
        let segments = self.config.circle_segments;

        let (outer, inner) = if self.config.parallel {
            let outer = outer_tiles_par(shape, radius_deg, segments)?;
            let inner = inner_tiles_par(&outer, radius_deg)?;
            (outer, inner)
        } else {
            let outer = outer_tiles_with(shape, radius_deg, segments)?;
            let inner = inner_tiles(&outer, radius_deg)?;
            (outer, inner)
        };

        debug!(
            radius_km,
            radius_deg,
            outer = outer.len(),
            inner = inner.len(),
            parallel = self.config.parallel,
            "Built tile layers"
        );

        Ok(TileLayers {
            radius_km,
            radius_deg,
            outer,
            inner,
        })
    }

    /// Deduplicated union of both layers at the configured radius.
    pub fn build(&self, shape: &Shape) -> Result<TileSet> {
        Ok(self.build_layers(shape)?.union())
    }
}

/// The two generations of tiles from one run, kept apart.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayers {
    pub radius_km: f64,
    pub radius_deg: f64,
    /// Grid tiles whose circle intersects the shape, in walk order
    pub outer: Vec<GeoPoint>,
    /// Gap tiles at the centroids of complete 2x2 squares
    pub inner: Vec<GeoPoint>,
}

impl TileLayers {
    /// Both layers as one set, with coordinates wrapped and clamped into
    /// geographic range and exact duplicates collapsed.
    pub fn union(&self) -> TileSet {
        let tiles: TileSet = self
            .outer
            .iter()
            .chain(self.inner.iter())
            .map(GeoPoint::normalized)
            .collect();

        if tiles.is_empty() {
            warn!(radius_km = self.radius_km, "Tiling produced no tiles");
        } else {
            debug!(
                tiles = tiles.len(),
                outer = self.outer.len(),
                inner = self.inner.len(),
                "Tiled shape"
            );
        }
        tiles
    }

    pub fn search_circles(&self) -> Vec<SearchCircle> {
        self.union().search_circles(self.radius_km)
    }
}

/// Tile `shape` with circles of `radius_km` using default settings.
pub fn build_all_tiles(shape: &Shape, radius_km: f64) -> Result<TileSet> {
    TileSetBuilder::new(TilingConfig::default().with_radius_km(radius_km))?.build(shape)
}
