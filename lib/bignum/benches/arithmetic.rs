//! Benchmarks for multiplication, division and decimal conversion.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use openzeppelin_bignum::{DynUint, Limb};

const LIMB_COUNTS: [usize; 4] = [4, 16, 64, 256];

/// Deterministic operand of `len` limbs with a non-zero top limb.
fn operand(len: usize, seed: Limb) -> DynUint {
    let limbs: Vec<Limb> = (0..len as Limb)
        .map(|i| {
            (i + 1)
                .wrapping_mul(0x9e37_79b9_7f4a_7c15)
                .rotate_left(17)
                ^ seed
        })
        .chain(core::iter::once(seed | 1))
        .collect();
    DynUint::from_limbs(&limbs)
}

fn bench_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("mul");
    for len in LIMB_COUNTS {
        let a = operand(len, 0xdead_beef);
        let b = operand(len, 0xcafe_babe);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("karatsuba", len), &len, |bencher, _| {
            bencher.iter(|| black_box(&a) * black_box(&b))
        });
    }
    group.finish();
}

fn bench_div_rem(c: &mut Criterion) {
    let mut group = c.benchmark_group("div_rem");
    group.sample_size(10);
    for len in LIMB_COUNTS {
        let dividend = operand(len, 0x1234_5678);
        let divisor = operand(len / 2, 0x8765_4321);
        group.bench_with_input(BenchmarkId::new("shift_subtract", len), &len, |bencher, _| {
            bencher.iter(|| black_box(&dividend).div_rem(black_box(&divisor)).unwrap())
        });
    }
    group.finish();
}

fn bench_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("decimal");
    group.sample_size(10);
    for len in LIMB_COUNTS {
        let uint = operand(len, 0x0bad_f00d);
        let text = uint.to_decimal_string();
        group.bench_with_input(BenchmarkId::new("render", len), &len, |bencher, _| {
            bencher.iter(|| black_box(&uint).to_decimal_string())
        });
        group.bench_with_input(BenchmarkId::new("parse", len), &len, |bencher, _| {
            bencher.iter(|| DynUint::parse_decimal(black_box(&text)))
        });
    }
    group.finish();
}

criterion_group!(arithmetic, bench_mul, bench_div_rem, bench_decimal);
criterion_main!(arithmetic);
