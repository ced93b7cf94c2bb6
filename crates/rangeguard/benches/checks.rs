//! Benchmarks for the hot check paths.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rangeguard::prelude::*;

fn bench_scalar(c: &mut Criterion) {
    c.bench_function("limited_i64_pass", |b| {
        b.iter(|| {
            let checked: CheckResult<i64> = limited(black_box(7), Some(0), Some(100), None);
            checked.is_ok()
        });
    });

    c.bench_function("limited_i64_reject", |b| {
        b.iter(|| {
            let checked: CheckResult<i64> = limited(black_box(700), Some(0), Some(100), None);
            checked.is_err()
        });
    });

    c.bench_function("clip_f64", |b| {
        b.iter(|| clip(black_box(1.7_f64), Some(0.0), Some(1.0)));
    });
}

fn bench_integer(c: &mut Criterion) {
    c.bench_function("uint8_pass", |b| {
        b.iter(|| {
            let checked: CheckResult<i32> = uint8(black_box(200), None);
            checked.is_ok()
        });
    });
}

fn bench_length(c: &mut Criterion) {
    let payload = vec![0_u8; 64];
    c.bench_function("limited_len_slice", |b| {
        b.iter(|| {
            let checked: CheckResult<&[u8]> =
                limited_len(black_box(payload.as_slice()), Some(1), Some(128), None);
            checked.is_ok()
        });
    });
}

criterion_group!(benches, bench_scalar, bench_integer, bench_length);
criterion_main!(benches);
