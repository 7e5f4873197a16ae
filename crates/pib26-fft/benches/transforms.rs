//! Criterion benchmarks for the complex transforms.

use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pib26_fft::{Complex, ComplexFft, Rad2Itr, Rad2Rec, Rad3Rec, Rad4Rec, RootTable};

fn signal(len: usize) -> Vec<Complex> {
    (0..len)
        .map(|i| Complex::real(f64::from(u32::try_from(i % 676).unwrap_or(0))))
        .collect()
}

fn round_trip(fft: &dyn ComplexFft, input: &[Complex]) -> Vec<Complex> {
    let mut data = input.to_vec();
    fft.forward(&mut data).unwrap();
    fft.inverse(&mut data).unwrap();
    data
}

fn bench_transforms(c: &mut Criterion) {
    let table = Arc::new(RootTable::new(3 << 16));
    let transforms: Vec<(&str, Box<dyn ComplexFft>)> = vec![
        ("Rad2Itr", Box::new(Rad2Itr::new(Arc::clone(&table)))),
        ("Rad2Rec", Box::new(Rad2Rec::new(Arc::clone(&table)))),
        ("Rad4Rec", Box::new(Rad4Rec::new(Arc::clone(&table)))),
        ("Rad3Rec", Box::new(Rad3Rec::new(Arc::clone(&table)))),
    ];
    let lens: Vec<usize> = vec![1 << 10, 1 << 13, 1 << 16];

    for (name, fft) in &transforms {
        let mut group = c.benchmark_group(*name);
        for &len in &lens {
            group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
                let data = signal(len);
                b.iter(|| round_trip(fft.as_ref(), &data));
            });
        }
        group.finish();
    }

    let rad3 = Rad3Rec::new(Arc::clone(&table));
    let mut group = c.benchmark_group("Rad3Rec/3x2^k");
    for &len in &[3 << 9, 3 << 12, 3 << 15] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let data = signal(len);
            b.iter(|| round_trip(&rad3, &data));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transforms);
criterion_main!(benches);
