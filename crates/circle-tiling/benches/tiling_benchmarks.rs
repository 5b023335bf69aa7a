//! Benchmarks for the circle-tiling crate.
//!
//! Run with: cargo bench --package circle-tiling
//! Or: cargo bench --package circle-tiling --bench tiling_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use circle_tiling::{
    count_tiles, inner_tiles, inner_tiles_par, outer_tiles_par, outer_tiles_with, GeoPoint, Shape,
    TileSetBuilder, TilingConfig,
};
use test_utils::{fixtures, polygon_geojson, regular_polygon_ring};

fn city_shape() -> Shape {
    // A 24-gon roughly the size of a metro area around Chicago
    let ring = regular_polygon_ring((-87.75, 41.85), 0.6, 24);
    Shape::from_geojson_str(&polygon_geojson(&ring)).unwrap_or_else(|e| panic!("{}", e))
}

// =============================================================================
// GRID SIZE BENCHMARKS
// =============================================================================

fn bench_count_tiles(c: &mut Criterion) {
    let shape = city_shape();
    let bbox = shape.bounding_box();

    c.bench_function("count_tiles", |b| {
        b.iter(|| count_tiles(black_box(&bbox), black_box(0.05)))
    });
}

// =============================================================================
// OUTER GRID BENCHMARKS
// =============================================================================

fn bench_outer_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("outer_tiles");
    let shape = city_shape();

    for radius in [0.1, 0.05, 0.02] {
        let grid = count_tiles(&shape.bounding_box(), radius).unwrap_or_else(|e| panic!("{}", e));
        group.throughput(Throughput::Elements(grid.capacity() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", radius), &radius, |b, &r| {
            b.iter(|| outer_tiles_with(black_box(&shape), r, 64))
        });
        group.bench_with_input(BenchmarkId::new("parallel", radius), &radius, |b, &r| {
            b.iter(|| outer_tiles_par(black_box(&shape), r, 64))
        });
    }

    // Coarser circles make each intersection test cheaper
    for segments in [16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("segments", segments), &segments, |b, &s| {
            b.iter(|| outer_tiles_with(black_box(&shape), 0.05, s))
        });
    }

    group.finish();
}

// =============================================================================
// GAP FILLING BENCHMARKS
// =============================================================================

fn bench_inner_tiles(c: &mut Criterion) {
    let mut group = c.benchmark_group("inner_tiles");

    for side in [10usize, 50, 200] {
        let outer: Vec<GeoPoint> = (0..side)
            .flat_map(|i| (0..side).map(move |j| GeoPoint::new(i as f64 * 0.1, -(j as f64) * 0.1)))
            .collect();
        group.throughput(Throughput::Elements(outer.len() as u64));

        group.bench_with_input(BenchmarkId::new("sequential", side), &outer, |b, outer| {
            b.iter(|| inner_tiles(black_box(outer), 0.05))
        });
        group.bench_with_input(BenchmarkId::new("parallel", side), &outer, |b, outer| {
            b.iter(|| inner_tiles_par(black_box(outer), 0.05))
        });
    }

    group.finish();
}

// =============================================================================
// END-TO-END BENCHMARKS
// =============================================================================

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let city = city_shape();
    let loop_shape = Shape::from_geojson_str(fixtures::CHICAGO_LOOP).unwrap_or_else(|e| panic!("{}", e));

    let sequential = TileSetBuilder::default();
    let parallel = TileSetBuilder::new(TilingConfig::default().with_parallel(true))
        .unwrap_or_else(|e| panic!("{}", e));

    group.bench_function("city_5km", |b| {
        b.iter(|| sequential.build_layers_km(black_box(&city), 5.0).map(|l| l.union()))
    });
    group.bench_function("city_5km_parallel", |b| {
        b.iter(|| parallel.build_layers_km(black_box(&city), 5.0).map(|l| l.union()))
    });
    group.bench_function("loop_500m", |b| {
        b.iter(|| sequential.build_layers_km(black_box(&loop_shape), 0.5).map(|l| l.union()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_count_tiles,
    bench_outer_tiles,
    bench_inner_tiles,
    bench_build,
);

criterion_main!(benches);
