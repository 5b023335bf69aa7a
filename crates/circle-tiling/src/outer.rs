//! Grid-aligned outer tiles.
//!
//! Circle centers sit on a regular grid anchored at the bounding box's
//! northwest corner, spaced `2 * radius` apart in both axes. Columns run
//! west to east; within a column, rows run north to south starting again
//! from the box's top latitude. Only centers whose circle intersects the
//! polygon are kept.

use rayon::prelude::*;
use tracing::{debug, warn};

use geo_common::GeoPoint;
use polygon_ops::{Shape, DEFAULT_CIRCLE_SEGMENTS};

use crate::counter::{count_tiles, GridSize};
use crate::error::Result;

/// Outer tile centers for `shape` at `radius` degrees, in grid walk order.
pub fn outer_tiles(shape: &Shape, radius: f64) -> Result<Vec<GeoPoint>> {
    outer_tiles_with(shape, radius, DEFAULT_CIRCLE_SEGMENTS)
}

/// Like [`outer_tiles`], with an explicit circle approximation.
pub fn outer_tiles_with(shape: &Shape, radius: f64, segments: usize) -> Result<Vec<GeoPoint>> {
    let walk = GridWalk::new(shape, radius)?;

    let tiles: Vec<GeoPoint> = (0..walk.grid.columns)
        .flat_map(|column| walk.column(shape, column, segments))
        .collect();

    walk.report(tiles.len());
    Ok(tiles)
}

/// Parallel variant of [`outer_tiles_with`]: columns are evaluated
/// independently and concatenated in column order, so the output matches
/// the sequential walk exactly.
pub fn outer_tiles_par(shape: &Shape, radius: f64, segments: usize) -> Result<Vec<GeoPoint>> {
    let walk = GridWalk::new(shape, radius)?;

    let columns: Vec<Vec<GeoPoint>> = (0..walk.grid.columns)
        .into_par_iter()
        .map(|column| walk.column(shape, column, segments))
        .collect();
    let tiles: Vec<GeoPoint> = columns.into_iter().flatten().collect();

    walk.report(tiles.len());
    Ok(tiles)
}

struct GridWalk {
    anchor: GeoPoint,
    step: f64,
    radius: f64,
    grid: GridSize,
}

impl GridWalk {
    fn new(shape: &Shape, radius: f64) -> Result<Self> {
        let bbox = shape.bounding_box();
        let grid = count_tiles(&bbox, radius)?;

        if bbox.is_degenerate() {
            warn!(bbox = ?bbox, "Tiling a degenerate bounding box");
        }

        Ok(Self {
            anchor: bbox.north_west(),
            step: 2.0 * radius,
            radius,
            grid,
        })
    }

    /// Intersecting centers of one column, north to south.
    fn column(&self, shape: &Shape, column: usize, segments: usize) -> Vec<GeoPoint> {
        let lng = self.anchor.lng + column as f64 * self.step;

        (0..self.grid.rows)
            .map(|row| GeoPoint::new(lng, self.anchor.lat - row as f64 * self.step))
            .filter(|center| shape.intersects_circle_with(center, self.radius, segments))
            .collect()
    }

    fn report(&self, kept: usize) {
        debug!(
            columns = self.grid.columns,
            rows = self.grid.rows,
            radius = self.radius,
            kept,
            "Walked outer tile grid"
        );
        if kept == 0 {
            warn!("No grid circle intersects the polygon");
        }
    }
}
