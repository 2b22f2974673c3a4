#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line and circle rasterization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use trueno_raster::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    for length in [10, 100, 1_000, 10_000] {
        let seg = Segment::from_coords(0, 0, length, length / 3);

        group.bench_with_input(BenchmarkId::new("general", length), &seg, |b, &seg| {
            b.iter(|| rasterize_line(black_box(seg)));
        });

        group.bench_with_input(BenchmarkId::new("specialized", length), &seg, |b, &seg| {
            b.iter(|| rasterize_line_specialized(black_box(seg)));
        });
    }

    group.finish();
}

fn line_fast_path_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_fast_path");

    let cases = [
        ("horizontal", Segment::from_coords(0, 0, 10_000, 0)),
        ("vertical", Segment::from_coords(0, 0, 0, 10_000)),
        ("diagonal", Segment::from_coords(0, 0, 10_000, -10_000)),
    ];

    for (name, seg) in cases {
        group.bench_with_input(BenchmarkId::new("general", name), &seg, |b, &seg| {
            b.iter(|| rasterize_line(black_box(seg)));
        });

        group.bench_with_input(BenchmarkId::new("specialized", name), &seg, |b, &seg| {
            b.iter(|| rasterize_line_specialized(black_box(seg)));
        });
    }

    group.finish();
}

fn circle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("circle");

    for radius in [10, 100, 1_000, 10_000] {
        let spec = CircleSpec::new(radius, Point::new(512, 512)).expect("radius is valid");

        group.bench_with_input(BenchmarkId::from_parameter(radius), &spec, |b, spec| {
            b.iter(|| rasterize_circle(black_box(spec)));
        });
    }

    group.finish();
}

criterion_group!(benches, line_benchmark, line_fast_path_benchmark, circle_benchmark);
criterion_main!(benches);
