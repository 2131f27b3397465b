//! Benchmarks for crop geometry and distance filtering

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use face_sampler::distance_filter::DistanceFilter;
use face_sampler::geometry::EyePairGeometry;
use face_sampler::sampler::serialize_sample;
use opencv::core::{Mat, Rect, Scalar, CV_8UC1};

fn benchmark_geometry(c: &mut Criterion) {
    // Eye rectangle pairs spread over plausible frame positions
    let pairs: Vec<(Rect, Rect)> = (0..100)
        .map(|i| {
            let x = 50 + (i * 7) % 300;
            let y = 60 + (i * 13) % 200;
            (
                Rect::new(x, y, 22, 20),
                Rect::new(x + 40 + (i % 10), y + (i % 5), 24, 21),
            )
        })
        .collect();

    c.bench_function("eye_pair_geometry", |b| {
        b.iter(|| {
            for &(first, second) in &pairs {
                let geometry = EyePairGeometry::new(black_box(first), black_box(second));
                black_box(geometry.crop_region(1.6, 0.2));
            }
        });
    });
}

fn benchmark_distance_filter(c: &mut Criterion) {
    // Deterministic noisy distance stream around 40 px
    let distances: Vec<f64> = (0..1000)
        .map(|i| {
            let t = f64::from(i) * 0.1;
            40.0 + 2.0 * t.sin() + if i % 97 == 0 { 20.0 } else { 0.0 }
        })
        .collect();

    c.bench_function("distance_filter_stream", |b| {
        b.iter(|| {
            let mut filter = DistanceFilter::new(5, 0.2);
            for &distance in &distances {
                black_box(filter.offer(black_box(distance)));
            }
        });
    });
}

fn benchmark_serialization(c: &mut Criterion) {
    let sample = Mat::new_rows_cols_with_default(64, 64, CV_8UC1, Scalar::all(127.0)).unwrap();

    c.bench_function("serialize_sample_64x64", |b| {
        b.iter(|| black_box(serialize_sample(black_box(&sample)).unwrap()));
    });
}

criterion_group!(
    benches,
    benchmark_geometry,
    benchmark_distance_filter,
    benchmark_serialization
);
criterion_main!(benches);
