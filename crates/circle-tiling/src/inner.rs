//! Gap-filling inner tiles.
//!
//! Four outer tiles at the corners of a `2r x 2r` square leave a diamond
//! in the middle that none of them covers. For every such square one extra
//! tile is placed at its centroid.
//!
//! Outer tiles are processed as an ordered worklist. Each candidate is
//! treated as the northwest corner of a square and is removed from the
//! pending set before its east, south and southeast neighbors are looked
//! up, so a tile never matches itself and a square is found from exactly
//! one corner. Coordinates are compared as [`QuantizedPoint`] keys.

use std::collections::{HashMap, HashSet};

use rayon::prelude::*;
use tracing::debug;

use geo_common::{quantize, GeoPoint, QuantizedPoint};

use crate::error::{validate_radius, Result};

/// Centroids of every complete 2x2 square among `outer`, in candidate order.
pub fn inner_tiles(outer: &[GeoPoint], radius: f64) -> Result<Vec<GeoPoint>> {
    validate_radius(radius)?;

    let mut pending: HashSet<QuantizedPoint> = outer.iter().map(GeoPoint::key).collect();
    let mut tiles = Vec::new();

    for candidate in outer {
        // A repeated coordinate is the same tile and was already a candidate
        if !pending.remove(&candidate.key()) {
            continue;
        }

        let square = Square::north_west_at(candidate, radius);
        if square.neighbors().iter().all(|k| pending.contains(k)) {
            tiles.push(square.centroid(radius));
        }
    }

    debug!(outer = outer.len(), inner = tiles.len(), radius, "Filled inner gaps");
    Ok(tiles)
}

/// Parallel variant of [`inner_tiles`].
///
/// Only the first occurrence of a coordinate is a candidate, and a
/// neighbor only counts when its first position in `outer` comes after
/// the candidate's, which is exactly what remains pending in the
/// sequential worklist. Output order matches the sequential variant.
pub fn inner_tiles_par(outer: &[GeoPoint], radius: f64) -> Result<Vec<GeoPoint>> {
    validate_radius(radius)?;

    let mut first_index: HashMap<QuantizedPoint, usize> = HashMap::with_capacity(outer.len());
    for (index, point) in outer.iter().enumerate() {
        first_index.entry(point.key()).or_insert(index);
    }

    let tiles: Vec<GeoPoint> = outer
        .par_iter()
        .enumerate()
        .filter(|(index, candidate)| first_index.get(&candidate.key()) == Some(index))
        .filter_map(|(index, candidate)| {
            let square = Square::north_west_at(candidate, radius);
            let later = |key: &QuantizedPoint| first_index.get(key).is_some_and(|&i| i > index);
            square
                .neighbors()
                .iter()
                .all(later)
                .then(|| square.centroid(radius))
        })
        .collect();

    debug!(outer = outer.len(), inner = tiles.len(), radius, "Filled inner gaps in parallel");
    Ok(tiles)
}

/// Keys of a candidate square, derived from its northwest corner.
struct Square {
    east: QuantizedPoint,
    south: QuantizedPoint,
    south_east: QuantizedPoint,
}

impl Square {
    fn north_west_at(corner: &GeoPoint, radius: f64) -> Self {
        let key = corner.key();
        let east_lng = quantize(corner.lng + 2.0 * radius);
        let south_lat = quantize(corner.lat - 2.0 * radius);

        Self {
            east: QuantizedPoint::new(east_lng, key.lat),
            south: QuantizedPoint::new(key.lng, south_lat),
            south_east: QuantizedPoint::new(east_lng, south_lat),
        }
    }

    fn neighbors(&self) -> [QuantizedPoint; 3] {
        [self.east, self.south, self.south_east]
    }

    /// Centre of the square: half a step back from the southeast corner.
    fn centroid(&self, radius: f64) -> GeoPoint {
        let corner = self.south_east.to_point();
        GeoPoint::new(corner.lng - radius, corner.lat + radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TilingError;

    fn square_of_four(r: f64) -> Vec<GeoPoint> {
        vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(2.0 * r, 0.0),
            GeoPoint::new(0.0, -2.0 * r),
            GeoPoint::new(2.0 * r, -2.0 * r),
        ]
    }

    #[test]
    fn test_single_square_yields_centroid() {
        let r = 0.25;
        let tiles = inner_tiles(&square_of_four(r), r).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].key(), GeoPoint::new(r, -r).key());
    }

    #[test]
    fn test_candidate_order_decides_detection() {
        let r = 0.25;
        let mut outer = square_of_four(r);
        outer.reverse();
        // Reversed, the southeast corner comes first and the northwest last,
        // so the northwest candidate sees no pending neighbors.
        assert!(inner_tiles(&outer, r).unwrap().is_empty());

        outer.swap(0, 3);
        let tiles = inner_tiles(&outer, r).unwrap();
        assert_eq!(tiles.len(), 1);
    }

    #[test]
    fn test_three_corners_leave_gap_open() {
        let r = 0.25;
        let mut outer = square_of_four(r);
        outer.pop();
        assert!(inner_tiles(&outer, r).unwrap().is_empty());
    }

    #[test]
    fn test_drifted_coordinates_still_match() {
        let r = 0.1;
        let outer = vec![
            GeoPoint::new(0.0, 0.3),
            GeoPoint::new(0.1 + 0.1, 0.3),
            GeoPoint::new(0.0, 0.1 + 0.2 - 0.2),
            GeoPoint::new(0.2, 0.30000000000000004 - 0.2),
        ];
        let tiles = inner_tiles(&outer, r).unwrap();
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].key(), GeoPoint::new(0.1, 0.2).key());
    }

    #[test]
    fn test_duplicate_candidate_does_not_match_itself() {
        let r = 0.25;
        let mut outer = square_of_four(r);
        outer.insert(1, GeoPoint::new(0.0, 0.0));
        assert_eq!(inner_tiles(&outer, r).unwrap().len(), 1);
        assert_eq!(inner_tiles_par(&outer, r).unwrap().len(), 1);
    }

    #[test]
    fn test_three_by_three_grid_yields_four() {
        let r = 0.5;
        let outer: Vec<GeoPoint> = (0..3)
            .flat_map(|i| (0..3).map(move |j| GeoPoint::new(i as f64, -(j as f64))))
            .collect();
        let tiles = inner_tiles(&outer, r).unwrap();
        let keys: Vec<QuantizedPoint> = tiles.iter().map(GeoPoint::key).collect();
        assert_eq!(
            keys,
            vec![
                GeoPoint::new(0.5, -0.5).key(),
                GeoPoint::new(0.5, -1.5).key(),
                GeoPoint::new(1.5, -0.5).key(),
                GeoPoint::new(1.5, -1.5).key(),
            ]
        );
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let r = 0.5;
        let outer: Vec<GeoPoint> = (0..6)
            .flat_map(|i| (0..4).map(move |j| GeoPoint::new(i as f64, -(j as f64))))
            .filter(|p| !(p.lng == 3.0 && p.lat == -1.0))
            .collect();

        let sequential = inner_tiles(&outer, r).unwrap();
        let parallel = inner_tiles_par(&outer, r).unwrap();
        assert_eq!(sequential, parallel);

        let mut reversed = outer.clone();
        reversed.reverse();
        assert_eq!(
            inner_tiles(&reversed, r).unwrap(),
            inner_tiles_par(&reversed, r).unwrap()
        );
    }

    #[test]
    fn test_empty_and_invalid() {
        assert!(inner_tiles(&[], 0.3).unwrap().is_empty());
        assert!(matches!(
            inner_tiles(&square_of_four(0.3), 0.0),
            Err(TilingError::InvalidRadius(_))
        ));
        assert!(matches!(
            inner_tiles_par(&square_of_four(0.3), -1.0),
            Err(TilingError::InvalidRadius(_))
        ));
    }
}
