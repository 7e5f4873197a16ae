#![no_main]

use libfuzzer_sys::fuzz_target;

use pib26_core::{newton, BigFloat, Karatsuba, NoOpTicker};

const PREC: usize = 12;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let value = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    if value == 0 {
        return;
    }

    let mut strategy = Karatsuba::new(8 * BigFloat::buffer_len(PREC));
    let mut a = BigFloat::new(PREC);
    a.assign_small(value);
    let mut r = BigFloat::new(PREC);
    newton::recip(&mut r, &mut a, &mut strategy, &mut NoOpTicker).unwrap();

    // a * r lands within a few units of the last place of 1
    let mut residual = BigFloat::new(PREC + 4);
    residual.mul(&a, &r, &mut strategy).unwrap();
    let mut one = BigFloat::new(2);
    one.assign_small(1);
    residual.sub_assign(&one);

    let bound = 1 - isize::try_from(PREC).unwrap();
    assert!(
        residual.is_zero() || residual.exponent() < bound,
        "recip({value}) residual {residual}"
    );
});
