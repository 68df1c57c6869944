use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ndarray::Array1;

use driftrs_stream::interpolate::interpolate;
use driftrs_stream::interpolate::interpolate_sector;
use driftrs_stream::StreamField;

fn make_field(size: usize) -> StreamField {
    StreamField::from_fn(
        Array1::range(0., size as f64, 1.),
        Array1::range(0., size as f64, 1.),
        2,
        |lat, lon, k| {
            if k == 0 {
                0.3 * lat - 0.7 * lon
            } else {
                1.1 * lon + 0.2 * lat
            }
        },
    )
    .unwrap()
}

fn bench_interpolate_point(c: &mut Criterion) {
    let sizes = [16, 64, 256, 1024];
    for &size in &sizes {
        let field = make_field(size);
        let extent = (size - 1) as f64;
        let (lat, lon) = (0.37 * extent, 0.61 * extent);

        c.bench_function(&format!("interpolate_point_{size}x{size}"), |b| {
            b.iter(|| black_box(interpolate(&field, black_box(lat), black_box(lon)).unwrap()));
        });
    }
}

fn bench_interpolate_track(c: &mut Criterion) {
    // one query per cell, marching diagonally across the grid
    let field = make_field(256);
    let queries: Vec<(f64, f64)> = (0..255)
        .map(|i| (i as f64 + 0.5, (254 - i) as f64 + 0.25))
        .collect();

    c.bench_function("interpolate_track_255_queries_256x256", |b| {
        b.iter(|| {
            for &(lat, lon) in &queries {
                black_box(interpolate(&field, lat, lon).unwrap());
            }
        });
    });
}

fn bench_interpolate_sector(c: &mut Criterion) {
    let field = make_field(64);
    for &nodes in &[8usize, 32, 128] {
        let step = 1. / nodes as f64;

        c.bench_function(&format!("interpolate_sector_{nodes}x{nodes}"), |b| {
            b.iter(|| black_box(interpolate_sector(&field, 31.5, 31.5, step).unwrap()));
        });
    }
}

criterion_group!(
    benches,
    bench_interpolate_point,
    bench_interpolate_track,
    bench_interpolate_sector
);
criterion_main!(benches);
