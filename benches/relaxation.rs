//! Benchmarks for the CPU-side relaxation pass.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pixelfield::prelude::*;
use pixelfield::ParticleAttributes;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn build_field(side: u32) -> ParticleField {
    let base = RasterSource::solid(side, side, [255, 255, 255, 255]).unwrap();
    let radial = RasterSource::solid(side, side, [0, 0, 0, 255]).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    let attrs = ParticleAttributes::build(&base, &radial, &mut rng).unwrap();
    ParticleField::with_attributes(attrs)
}

fn bench_attribute_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("attribute_build");

    for side in [64u32, 256, 512] {
        let base = RasterSource::solid(side, side, [255, 255, 255, 255]).unwrap();
        let radial = RasterSource::solid(side, side, [0, 0, 0, 255]).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, _| {
            b.iter(|| {
                let mut rng = SmallRng::seed_from_u64(1);
                black_box(ParticleAttributes::build(&base, &radial, &mut rng).unwrap())
            })
        });
    }

    group.finish();
}

fn bench_relaxation_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("relaxation_pass");

    for side in [64u32, 256, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(side), &side, |b, &side| {
            let mut field = build_field(side);
            let mut t = 0.0f32;
            b.iter(|| {
                // Re-arm each iteration so the converging path is measured,
                // not the idle early-out.
                field.deselect();
                field.update(t, 1.0 / 60.0);
                t += 1.0 / 60.0;
                black_box(field.select_weights().len())
            })
        });
    }

    group.finish();
}

fn bench_idle_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("idle_update");

    // Converged field: the update should cost two scalar adds and a branch.
    let mut field = build_field(512);
    let mut t = 0.0f32;
    group.bench_function("512", |b| {
        b.iter(|| {
            field.update(t, 1.0 / 60.0);
            t += 1.0 / 60.0;
            black_box(field.accumulated_delta())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_attribute_build,
    bench_relaxation_pass,
    bench_idle_update
);
criterion_main!(benches);
