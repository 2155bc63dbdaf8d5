//! Performance benchmarks for the scalar-multiplication hot path.
//!
//! Run with: cargo bench --bench scalar_mul_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ed25519_ristretto::{sign, verify, Scalar, BASE_POINT};
use std::hint::black_box;
use std::time::Duration;

fn bench_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_mul");
    group.measurement_time(Duration::from_secs(10));

    for exponent in [1u64, 1_000, 1_000_000, u64::MAX].iter() {
        let scalar = Scalar::from_u64(*exponent);
        group.bench_with_input(
            BenchmarkId::new("base_point_multiply", exponent),
            &scalar,
            |b, s| {
                b.iter(|| {
                    let point = BASE_POINT.scalar_mul(black_box(s));
                    black_box(point);
                });
            },
        );
    }

    group.finish();
}

fn bench_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("eddsa_sign");
    group.measurement_time(Duration::from_secs(10));

    let seed = [7u8; 32];
    for msg_size in [0, 32, 256, 1024].iter() {
        let message = vec![0u8; *msg_size];
        group.bench_with_input(BenchmarkId::new("message_size", msg_size), &message, |b, msg| {
            b.iter(|| {
                let signature = sign(black_box(seed), black_box(msg)).expect("sign succeeds");
                black_box(signature);
            });
        });
    }

    group.finish();
}

fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("eddsa_verify");
    group.measurement_time(Duration::from_secs(10));

    let seed = [7u8; 32];
    let public_key = ed25519_ristretto::get_public_key(seed).expect("get_public_key succeeds");

    for msg_size in [0, 32, 256, 1024].iter() {
        let message = vec![0u8; *msg_size];
        let signature = sign(seed, &message).expect("sign succeeds");
        group.bench_with_input(BenchmarkId::new("message_size", msg_size), &message, |b, msg| {
            b.iter(|| {
                let ok = verify(black_box(public_key), black_box(msg), black_box(signature))
                    .expect("well-formed inputs");
                black_box(ok);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scalar_mul, bench_sign, bench_verify);
criterion_main!(benches);
