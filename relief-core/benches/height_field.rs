#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use relief_core::HeightFieldGenerator;
use std::hint::black_box;

fn bench_generate_sizes(c: &mut Criterion) {
    let generator = HeightFieldGenerator::new(0);

    let mut group = c.benchmark_group("height_field_generate");
    for size in [128usize, 256, 512] {
        group.throughput(criterion::Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}x{size}")),
            &size,
            |b, &s| {
                b.iter(|| black_box(generator.generate(black_box(s), black_box(s))));
            },
        );
    }
    group.finish();
}

fn bench_generator_creation(c: &mut Criterion) {
    c.bench_function("height_field_generator_creation", |b| {
        b.iter(|| black_box(HeightFieldGenerator::new(black_box(0))));
    });
}

criterion_group!(benches, bench_generate_sizes, bench_generator_creation);
criterion_main!(benches);
