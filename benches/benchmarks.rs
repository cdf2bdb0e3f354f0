use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use gf256sss::{field, reconstruct, split, Share, SplitOptions};

fn split_secret(c: &mut Criterion) {
    let secret = [0x42u8; 32];

    c.bench_function("split_2_of_3", |b| {
        b.iter(|| split(black_box(&secret), SplitOptions { min: 2, total: 3 }))
    });
    c.bench_function("split_254_of_254", |b| {
        b.iter(|| split(black_box(&[1]), SplitOptions { min: 254, total: 254 }))
    });
}

fn reconstruct_secret(c: &mut Criterion) {
    let shares: Vec<Share> = split(&[0x42u8; 32], SplitOptions { min: 3, total: 5 }).unwrap();
    let max_shares: Vec<Share> = split(&[1], SplitOptions { min: 254, total: 254 }).unwrap();

    c.bench_function("reconstruct_3_of_5", |b| {
        b.iter(|| reconstruct(black_box(&shares[..3])))
    });
    c.bench_function("reconstruct_254", |b| {
        b.iter(|| reconstruct(black_box(&max_shares)))
    });
}

fn field_ops(c: &mut Criterion) {
    c.bench_function("field_mul", |b| {
        b.iter(|| field::mul(black_box(0x53), black_box(0xca)))
    });
    c.bench_function("field_div", |b| {
        b.iter(|| field::div(black_box(0x53), black_box(0xca)))
    });
}

criterion_group!(benches, split_secret, reconstruct_secret, field_ops);
criterion_main!(benches);
