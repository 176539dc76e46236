//! Criterion benchmarks for stringify and string copies.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use jo_core::{stringify_float, stringify_int, JoStr, FLOAT_BUF_LEN, INT_BUF_LEN};

fn bench_stringify(c: &mut Criterion) {
    let mut group = c.benchmark_group("stringify_int");
    for value in [0i64, 42, -1_234_567, i64::MIN] {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, &value| {
            let mut buf = [0u8; INT_BUF_LEN];
            b.iter(|| stringify_int(black_box(value), &mut buf));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("stringify_float");
    for value in [0.1f64, 1.0 / 3.0, 1e300, f64::MIN_POSITIVE] {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |b, &value| {
            let mut buf = [0u8; FLOAT_BUF_LEN];
            b.iter(|| stringify_float(black_box(value), &mut buf));
        });
    }
    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_of");
    for len in [16usize, 1_024, 65_536] {
        let bytes = vec![b'x'; len];
        let src = JoStr::from_bytes(&bytes);
        group.bench_with_input(BenchmarkId::from_parameter(len), &src, |b, src| {
            b.iter(|| JoStr::copy_of(black_box(src)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stringify, bench_copy);
criterion_main!(benches);
