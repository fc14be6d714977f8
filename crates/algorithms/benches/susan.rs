//! Benchmarks for SUSAN edge strength and orientation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use susanedge_algorithms::edges::{
    edge_orientation, edge_strength, EdgeOrientationParams, EdgeStrengthParams,
};
use susanedge_core::Raster;

fn create_test_image(size: usize) -> Raster<f64> {
    let mut r = Raster::new(size, size);
    // Blocky pattern with texture so both passes see plenty of edges
    for row in 0..size {
        for col in 0..size {
            let block = if (row / 16 + col / 16) % 2 == 0 { 40.0 } else { 200.0 };
            let v = block + ((row * 7 + col * 13) % 11) as f64;
            r.set(row, col, v).unwrap();
        }
    }
    r
}

fn bench_strength(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges/strength");
    let params = EdgeStrengthParams::default();
    for size in [128, 256, 512] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| edge_strength(black_box(&image), params).unwrap())
        });
    }
    group.finish();
}

fn bench_strength_connected(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges/strength_connected");
    let params = EdgeStrengthParams {
        connected: true,
        ..Default::default()
    };
    for size in [128, 256, 512] {
        let image = create_test_image(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| edge_strength(black_box(&image), params).unwrap())
        });
    }
    group.finish();
}

fn bench_orientation(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges/orientation");
    for size in [128, 256, 512] {
        let image = create_test_image(size);
        let strength = edge_strength(&image, EdgeStrengthParams::default()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| edge_orientation(black_box(&strength), EdgeOrientationParams::default()).unwrap())
        });
    }
    group.finish();
}

fn bench_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("edges/strength_radius");
    let image = create_test_image(256);
    for radius in [1, 2, 3, 5, 7] {
        let params = EdgeStrengthParams {
            radius,
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::from_parameter(radius), &radius, |b, _| {
            b.iter(|| edge_strength(black_box(&image), params).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_strength,
    bench_strength_connected,
    bench_orientation,
    bench_radius
);
criterion_main!(benches);
