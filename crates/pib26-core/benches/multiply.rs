//! Criterion benchmarks for the multiplication strategies and Newton
//! iteration.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pib26_core::constants::BASE;
use pib26_core::newton;
use pib26_core::{BigFloat, Digit, FftMul, Karatsuba, Multiplier, NoOpTicker, Schoolbook};

fn operand(len: usize, seed: u64) -> Vec<Digit> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            u32::try_from((state >> 33) % u64::from(BASE)).unwrap_or(0)
        })
        .collect()
}

fn bench_strategies(c: &mut Criterion) {
    let lens: Vec<usize> = vec![64, 256, 1_024, 4_096];
    let max = 2 * lens[lens.len() - 1];

    let mut strategies: Vec<Box<dyn Multiplier>> = vec![
        Box::new(Schoolbook::new(max)),
        Box::new(Karatsuba::new(max)),
        Box::new(FftMul::new(max).unwrap()),
    ];

    for strategy in &mut strategies {
        let mut group = c.benchmark_group(strategy.name());
        for &len in &lens {
            let a = operand(len, 1);
            let b = operand(len, 2);
            group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
                bench.iter(|| strategy.mul_digits(&a, &b).unwrap());
            });
        }
        group.finish();
    }
}

fn bench_newton(c: &mut Criterion) {
    let mut group = c.benchmark_group("invsqrt");
    for prec in [64usize, 512, 2_048] {
        let mut strategy = FftMul::new(2 * BigFloat::buffer_len(prec)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(prec), &prec, |bench, &prec| {
            bench.iter(|| {
                let mut r = BigFloat::new(prec);
                newton::invsqrt_small(&mut r, 2, &mut strategy, &mut NoOpTicker).unwrap();
                r
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_strategies, bench_newton);
criterion_main!(benches);
