//! Grid dimensions for spanning a bounding box with circles.

use serde::{Deserialize, Serialize};

use geo_common::BoundingBox;

use crate::error::{validate_radius, Result};

/// Columns and rows of a circle grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    /// Number of columns, west to east.
    pub columns: usize,
    /// Number of rows, north to south.
    pub rows: usize,
}

impl GridSize {
    /// Maximum number of circle centers the grid can produce.
    pub fn capacity(&self) -> usize {
        self.columns * self.rows
    }
}

/// Smallest grid of circles of `radius` degrees, spaced `2 * radius` apart
/// and starting at a box corner, that spans `bbox`.
///
/// `n = ceil((w - r) / 2r + 1)` and `m = ceil((h - r) / 2r + 1)`, never
/// less than 1, so a zero-width or zero-height box still gets one column
/// or row.
pub fn count_tiles(bbox: &BoundingBox, radius: f64) -> Result<GridSize> {
    validate_radius(radius)?;

    let (w, h) = bbox.dimensions();
    Ok(GridSize {
        columns: span_count(w, radius),
        rows: span_count(h, radius),
    })
}

fn span_count(length: f64, radius: f64) -> usize {
    let count = ((length - radius) / (2.0 * radius) + 1.0).ceil();
    count.max(1.0) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TilingError;

    fn bbox(w: f64, h: f64) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, w, h).unwrap()
    }

    #[test]
    fn test_unit_square_at_0_3() {
        // (1 - 0.3) / 0.6 + 1 = 2.1667
        let grid = count_tiles(&bbox(1.0, 1.0), 0.3).unwrap();
        assert_eq!(grid, GridSize { columns: 3, rows: 3 });
        assert_eq!(grid.capacity(), 9);
    }

    #[test]
    fn test_rectangular_box() {
        // w: (2 - 0.5) / 1 + 1 = 2.5, h: (0.5 - 0.5) / 1 + 1 = 1
        let grid = count_tiles(&bbox(2.0, 0.5), 0.5).unwrap();
        assert_eq!(grid, GridSize { columns: 3, rows: 1 });
    }

    #[test]
    fn test_box_smaller_than_radius() {
        let grid = count_tiles(&bbox(0.1, 0.1), 0.3).unwrap();
        assert_eq!(grid, GridSize { columns: 1, rows: 1 });
    }

    #[test]
    fn test_degenerate_box() {
        let point = BoundingBox::new(5.0, 5.0, 5.0, 5.0).unwrap();
        assert_eq!(
            count_tiles(&point, 0.3).unwrap(),
            GridSize { columns: 1, rows: 1 }
        );

        let line = BoundingBox::new(0.0, 5.0, 3.0, 5.0).unwrap();
        // (3 - 0.5) / 1 + 1 = 3.5
        assert_eq!(
            count_tiles(&line, 0.5).unwrap(),
            GridSize { columns: 4, rows: 1 }
        );
    }

    #[test]
    fn test_invalid_radius() {
        assert!(matches!(
            count_tiles(&bbox(1.0, 1.0), 0.0),
            Err(TilingError::InvalidRadius(_))
        ));
        assert!(matches!(
            count_tiles(&bbox(1.0, 1.0), -0.3),
            Err(TilingError::InvalidRadius(_))
        ));
    }
}
