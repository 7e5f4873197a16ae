#![no_main]

use libfuzzer_sys::fuzz_target;

use pib26_core::{Digit, FftMul, Karatsuba, Multiplier, Schoolbook, BASE};

const MAX_LEN: usize = 600;

fn digits(bytes: &[u8]) -> Vec<Digit> {
    bytes
        .chunks(3)
        .map(|c| c.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)) % BASE)
        .collect()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // first byte picks where the operands split
    let split = 1 + usize::from(data[0]) * (data.len() - 1) / 256;
    let a = digits(&data[1..split]);
    let b = digits(&data[split..]);
    if a.is_empty() || b.is_empty() || a.len() + b.len() > MAX_LEN {
        return;
    }

    let cap = a.len() + b.len();
    let mut schoolbook = Schoolbook::new(cap);
    let mut karatsuba = Karatsuba::new(cap);
    let Ok(mut fft) = FftMul::new(cap) else {
        return;
    };

    let expected = schoolbook.multiply(&a, &b).unwrap();
    assert_eq!(karatsuba.multiply(&a, &b).unwrap(), expected, "Karatsuba != Schoolbook");
    assert_eq!(fft.multiply(&a, &b).unwrap(), expected, "FFT != Schoolbook");
});
