//! # ACT Guard Benchmarks
//!
//! | Area | Operation |
//! |------|-----------|
//! | act-02 | Drift lookup against a populated `PatchIndex` |
//! | act-02 | Guarding the full fixture module |
//! | act-02 | Parsing and guarding the fixture from source text |
//! | act-01 | Widening float sequences |
//!
//! ```bash
//! cargo bench -p act-tests --bench guard_benchmarks
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use act_01_scalar_utils::convert_float_sequence_to_numbers;
use act_02_type_guards::{PatchIndex, TypeGuardApi, TypeGuardService};
use act_tests::fixtures::{fixture_classes, fixture_functions, FIXTURE_TS};

fn bench_patch_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("act-02-patch-index");

    group.bench_function("register", |b| {
        let mut index = PatchIndex::new();
        b.iter(|| index.register(black_box(0), black_box(1)))
    });

    for count in [10, 100, 1_000] {
        let mut index = PatchIndex::new();
        for i in 0..count {
            index.register(i, 10);
        }
        group.bench_with_input(BenchmarkId::new("drifted", count), &index, |b, index| {
            b.iter(|| index.drifted(black_box(count / 2)))
        });
    }

    group.finish();
}

fn bench_guard_fixture(c: &mut Criterion) {
    let mut group = c.benchmark_group("act-02-guard-source");
    let service = TypeGuardService::new();
    let functions = fixture_functions();
    let classes = fixture_classes();

    group.throughput(Throughput::Bytes(FIXTURE_TS.len() as u64));
    group.bench_function("fixture_module", |b| {
        b.iter(|| {
            service
                .guard_source(black_box(FIXTURE_TS.as_bytes()), &functions, &classes)
                .map(|guarded| guarded.guards_inserted)
        })
    });
    group.bench_function("fixture_module_parsed", |b| {
        b.iter(|| {
            service
                .guard_typescript(black_box(FIXTURE_TS))
                .map(|guarded| guarded.guards_inserted)
        })
    });

    group.finish();
}

fn bench_float_widening(c: &mut Criterion) {
    let mut group = c.benchmark_group("act-01-widening");

    for len in [16, 1_024, 65_536] {
        let values: Vec<f32> = (0..len).map(|i| i as f32 * 0.5).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| convert_float_sequence_to_numbers(black_box(values)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_patch_index,
    bench_guard_fixture,
    bench_float_widening
);
criterion_main!(benches);
