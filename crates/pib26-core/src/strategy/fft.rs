//! FFT convolution multiplication.
//!
//! Operands are split into sub-digits, loaded as real parts of complex
//! vectors, transformed, multiplied pointwise and transformed back. Rounding
//! the scaled real parts recovers the exact convolution as long as no term
//! outgrows the double mantissa, which the packing choice guarantees.

use std::sync::Arc;

use pib26_fft::{Complex, ComplexFft, Rad3Rec, RootTable};
use tracing::debug;

use crate::constants::{Digit, BASE_MINOR, DIGS_PER_DIG, ROUNDING_MARGIN_BITS, THRESHOLD_SMOOTHING};
use crate::error::ArithError;
use crate::primitives::{add_small, mul_add, zeroize};

use super::{Multiplier, Product};

/// Sub-digits per digit the strategy may pack, in order of preference.
const PACKINGS: [usize; 3] = [1, 2, 4];

/// Element radix when each digit is split into `k` sub-digits.
fn element_base(k: usize) -> Digit {
    let mut base = 1;
    for _ in 0..DIGS_PER_DIG / k {
        base *= BASE_MINOR;
    }
    base
}

/// FFT multiplication with a fixed product capacity.
pub struct FftMul<F = Rad3Rec> {
    fft: F,
    max_product: usize,
    num1: Vec<Complex>,
    num2: Vec<Complex>,
    product: Product,
}

impl FftMul<Rad3Rec> {
    /// FFT multiplier over the radix-3 recursive transform.
    pub fn new(max_product: usize) -> Result<Self, ArithError> {
        Self::with_transform(max_product, Rad3Rec::new)
    }
}

impl<F: ComplexFft> FftMul<F> {
    /// FFT multiplier over a transform built from the sized root table.
    ///
    /// The table is `3 * 2^m` long with `2^m` covering the largest packed
    /// product, so every `2^j` and `3 * 2^j` transform up to that size
    /// divides it.
    pub fn with_transform(
        max_product: usize,
        build: impl Fn(Arc<RootTable>) -> F,
    ) -> Result<Self, ArithError> {
        let probe = build(Arc::new(RootTable::new(1)));
        let packing = packing_for(&probe, max_product)?;
        let table_len = 3 * (packing * max_product).max(1).next_power_of_two();
        let fft = build(Arc::new(RootTable::new(table_len)));
        let max_elements = fft.nearest_safe_length(packing * max_product)?;
        debug!(
            max_product,
            packing,
            table_len,
            max_elements,
            "built FFT multiplier"
        );
        Ok(Self {
            fft,
            max_product,
            num1: vec![Complex::ZERO; max_elements],
            num2: vec![Complex::ZERO; max_elements],
            product: Product::with_capacity(max_product),
        })
    }

    /// Sub-digits per digit used for operands of `operand_len` digits.
    pub fn packing(&self, operand_len: usize) -> Result<usize, ArithError> {
        packing_for(&self.fft, operand_len)
    }

    /// Whether a product of these lengths is computed a few digits short and
    /// patched, to stay below the next transform length.
    fn smooths(a_len: usize, b_len: usize) -> bool {
        let prod = a_len + b_len;
        let mut pow2 = 1;
        while pow2 * 2 < prod {
            pow2 *= 2;
        }
        a_len > THRESHOLD_SMOOTHING
            && b_len > THRESHOLD_SMOOTHING
            && prod - pow2 < 2 * THRESHOLD_SMOOTHING
    }

    /// Transform length and packing for a product, checked before any buffer
    /// is written.
    fn plan(&self, a_len: usize, b_len: usize) -> Result<(usize, usize), ArithError> {
        let k = self.packing(a_len.max(b_len))?;
        let elements = k * (a_len + b_len);
        let len = self.fft.nearest_safe_length(elements)?;
        if len > self.num1.len() {
            return Err(ArithError::UnsupportedTransformLength {
                length: len,
                table_size: self.fft.table().len(),
            });
        }
        Ok((len, k))
    }

    fn mul_core(
        &mut self,
        a: &[Digit],
        b: &[Digit],
        plan: (usize, usize),
    ) -> Result<(), ArithError> {
        let (len, k) = plan;
        load(&mut self.num1[..len], a, k);
        load(&mut self.num2[..len], b, k);
        self.fft.forward_unchecked(&mut self.num1[..len]);
        self.fft.forward_unchecked(&mut self.num2[..len]);
        for (x, y) in self.num1[..len].iter_mut().zip(&self.num2[..len]) {
            *x = *x * *y;
        }
        self.fft.inverse_unchecked(&mut self.num1[..len]);
        let out = self.product.reserve(a.len() + b.len())?;
        extract(out, &self.num1[..len], k);
        Ok(())
    }

    fn sqr_core(&mut self, a: &[Digit], plan: (usize, usize)) -> Result<(), ArithError> {
        let (len, k) = plan;
        load(&mut self.num1[..len], a, k);
        self.fft.forward_unchecked(&mut self.num1[..len]);
        for x in &mut self.num1[..len] {
            *x = *x * *x;
        }
        self.fft.inverse_unchecked(&mut self.num1[..len]);
        let out = self.product.reserve(2 * a.len())?;
        extract(out, &self.num1[..len], k);
        Ok(())
    }

    fn check_capacity(&self, requested: usize) -> Result<(), ArithError> {
        if requested > self.max_product {
            Err(ArithError::CapacityExceeded {
                requested,
                capacity: self.max_product,
            })
        } else {
            Ok(())
        }
    }
}

fn packing_for<F: ComplexFft>(fft: &F, operand_len: usize) -> Result<usize, ArithError> {
    PACKINGS
        .into_iter()
        .find(|&k| {
            let limit = fft.max_num_length_at_base(element_base(k)) >> ROUNDING_MARGIN_BITS;
            k * operand_len <= limit
        })
        .ok_or(ArithError::CapacityExceeded {
            requested: operand_len,
            capacity: (fft.max_num_length_at_base(element_base(4)) >> ROUNDING_MARGIN_BITS) / 4,
        })
}

/// Split each digit into `k` sub-digits, least significant first, and zero
/// the rest of the buffer.
fn load(buf: &mut [Complex], digits: &[Digit], k: usize) {
    let eb = element_base(k);
    let (used, rest) = buf.split_at_mut(digits.len() * k);
    for (chunk, &digit) in used.chunks_exact_mut(k).zip(digits) {
        let mut d = digit;
        for slot in chunk {
            *slot = Complex::real(f64::from(d % eb));
            d /= eb;
        }
    }
    rest.fill(Complex::ZERO);
}

/// Round the scaled convolution back to integers, release carries in the
/// element radix, and reassemble `out.len()` digits.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn extract(out: &mut [Digit], buf: &[Complex], k: usize) {
    let eb = f64::from(element_base(k));
    let scale = 1.0 / buf.len() as f64;
    let mut carry = 0.0_f64;
    let mut elements = buf.iter();
    for digit in out.iter_mut() {
        let mut value: Digit = 0;
        let mut weight: Digit = 1;
        for _ in 0..k {
            let term = elements.next().map_or(0.0, |c| (c.re * scale + 0.5).floor());
            let total = term + carry;
            carry = (total / eb).floor();
            let sub = (total - carry * eb) as Digit;
            value += sub * weight;
            weight *= element_base(k);
        }
        *digit = value;
    }
}

impl<F: ComplexFft> Multiplier for FftMul<F> {
    fn mul_digits(&mut self, a: &[Digit], b: &[Digit]) -> Result<(), ArithError> {
        let prod_len = a.len() + b.len();
        self.check_capacity(prod_len)?;
        if a.is_empty() || b.is_empty() {
            self.product.reserve(0)?;
            self.product.commit(0);
            return Ok(());
        }

        if Self::smooths(a.len(), b.len()) {
            let a_trunc = a.len() - THRESHOLD_SMOOTHING;
            let b_trunc = b.len() - THRESHOLD_SMOOTHING;
            let plan = self.plan(a_trunc, b_trunc)?;
            self.mul_core(&a[..a_trunc], &b[..b_trunc], plan)?;
            let out = self.product.reserve(prod_len)?;
            zeroize(&mut out[a_trunc + b_trunc..]);
            // (x B^n + X)(y B^m + Y) = xy B^(n+m) + x Y B^n + y X B^m + X Y
            for i in (1..=THRESHOLD_SMOOTHING).rev() {
                let at = a.len() - i;
                let bt = b.len() - i;
                let carry = mul_add(&mut out[at..at + bt], &b[..bt], a[at]);
                add_small(&mut out[at + bt..], carry);
                let carry = mul_add(&mut out[bt..bt + at], &a[..at], b[bt]);
                add_small(&mut out[at + bt..], carry);
                add_small(&mut out[at + bt..], u64::from(a[at]) * u64::from(b[bt]));
            }
        } else {
            let plan = self.plan(a.len(), b.len())?;
            self.mul_core(a, b, plan)?;
        }
        self.product.commit(prod_len);
        Ok(())
    }

    fn square_digits(&mut self, a: &[Digit]) -> Result<(), ArithError> {
        let prod_len = 2 * a.len();
        self.check_capacity(prod_len)?;
        if a.is_empty() {
            self.product.reserve(0)?;
            self.product.commit(0);
            return Ok(());
        }

        if Self::smooths(a.len(), a.len()) {
            let a_trunc = a.len() - THRESHOLD_SMOOTHING;
            let plan = self.plan(a_trunc, a_trunc)?;
            self.sqr_core(&a[..a_trunc], plan)?;
            let out = self.product.reserve(prod_len)?;
            zeroize(&mut out[2 * a_trunc..]);
            // (x B^n + X)^2 = x^2 B^2n + 2 x X B^n + X^2
            for i in (1..=THRESHOLD_SMOOTHING).rev() {
                let at = a.len() - i;
                let carry = mul_add(&mut out[at..2 * at], &a[..at], 2 * a[at]);
                add_small(&mut out[2 * at..], carry);
                add_small(&mut out[2 * at..], u64::from(a[at]) * u64::from(a[at]));
            }
        } else {
            let plan = self.plan(a.len(), a.len())?;
            self.sqr_core(a, plan)?;
        }
        self.product.commit(prod_len);
        Ok(())
    }

    fn product_len(&self) -> usize {
        self.product.len()
    }

    fn product_digits(&self, dst: &mut [Digit], origin: usize) {
        self.product.copy_out(dst, origin);
    }

    fn max_product_len(&self) -> usize {
        self.max_product
    }

    fn name(&self) -> &'static str {
        "FFT"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BASE;
    use crate::strategy::{Karatsuba, Schoolbook};
    use pib26_fft::{Rad2Itr, Rad4Rec};
    use proptest::prelude::*;

    fn digits(len: usize, seed: u64) -> Vec<Digit> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                u32::try_from((state >> 33) % u64::from(BASE)).unwrap()
            })
            .collect()
    }

    #[test]
    fn element_bases() {
        assert_eq!(element_base(1), BASE);
        assert_eq!(element_base(2), 676);
        assert_eq!(element_base(4), 26);
    }

    #[test]
    fn transform_length_for_5000_digit_operands() {
        let mul = FftMul::new(10_016).unwrap();
        assert_eq!(mul.plan(5000, 5000).unwrap(), (24_576, 2));
        assert!(mul.num1.len() >= 24_576);
    }

    #[test]
    fn packing_grows_with_length() {
        let mul = FftMul::new(64).unwrap();
        assert_eq!(mul.packing(100).unwrap(), 1);
        assert_eq!(mul.packing(128).unwrap(), 1);
        assert_eq!(mul.packing(129).unwrap(), 2);
        assert_eq!(mul.packing(5000).unwrap(), 2);
        assert_eq!(mul.packing(1 << 26).unwrap(), 4);
    }

    #[test]
    fn small_products_match_schoolbook() {
        let mut fft = FftMul::new(512).unwrap();
        let mut school = Schoolbook::new(512);
        for (la, lb) in [(1, 1), (3, 7), (40, 40), (100, 3), (200, 255)] {
            let a = digits(la, 1);
            let b = digits(lb, 2);
            assert_eq!(fft.multiply(&a, &b).unwrap(), school.multiply(&a, &b).unwrap());
        }
    }

    #[test]
    fn three_times_five() {
        let mut fft = FftMul::new(16).unwrap();
        assert_eq!(fft.multiply(&[3], &[5]).unwrap(), vec![15]);
    }

    #[test]
    fn smoothing_boundary_matches_unsmoothed() {
        // 130 + 130 = 260 is just above 256.
        assert!(FftMul::<Rad3Rec>::smooths(130, 130));
        assert!(FftMul::<Rad3Rec>::smooths(129, 132));
        assert!(!FftMul::<Rad3Rec>::smooths(140, 140));
        assert!(!FftMul::<Rad3Rec>::smooths(3, 258));

        let mut fft = FftMul::new(600).unwrap();
        let mut kara = Karatsuba::new(600);
        for (la, lb) in [(130, 130), (129, 132), (5, 259), (257, 6)] {
            let a = digits(la, 5);
            let b = digits(lb, 6);
            assert_eq!(fft.multiply(&a, &b).unwrap(), kara.multiply(&a, &b).unwrap());
            let sq = {
                fft.square_digits(&a).unwrap();
                let mut out = vec![0; fft.product_len()];
                fft.product_digits(&mut out, 0);
                out
            };
            assert_eq!(sq, kara.multiply(&a, &a).unwrap());
        }
    }

    #[test]
    fn max_digit_operands_are_exact() {
        let mut fft = FftMul::new(4096).unwrap();
        let mut kara = Karatsuba::new(4096);
        let a = vec![BASE - 1; 2000];
        assert_eq!(fft.multiply(&a, &a).unwrap(), kara.multiply(&a, &a).unwrap());
    }

    #[test]
    fn capacity_exceeded_before_any_work() {
        let mut fft = FftMul::new(8).unwrap();
        fft.mul_digits(&[1, 2], &[3]).unwrap();
        let before = fft.product_len();
        let err = fft.mul_digits(&[1; 5], &[1; 4]).unwrap_err();
        assert_eq!(
            err,
            ArithError::CapacityExceeded {
                requested: 9,
                capacity: 8
            }
        );
        assert_eq!(fft.product_len(), before);
    }

    #[test]
    fn other_transforms_agree() {
        let a = digits(300, 8);
        let b = digits(211, 9);
        let want = Schoolbook::new(1024).multiply(&a, &b).unwrap();
        let mut rad2 = FftMul::with_transform(1024, Rad2Itr::new).unwrap();
        let mut rad4 = FftMul::with_transform(1024, |t| Rad4Rec::with_threshold(t, 16)).unwrap();
        assert_eq!(rad2.multiply(&a, &b).unwrap(), want);
        assert_eq!(rad4.multiply(&a, &b).unwrap(), want);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(24))]

        #[test]
        fn agrees_with_karatsuba(
            a in prop::collection::vec(0..BASE, 1..400),
            b in prop::collection::vec(0..BASE, 1..400),
        ) {
            let mut fft = FftMul::new(800).unwrap();
            let mut kara = Karatsuba::new(800);
            prop_assert_eq!(fft.multiply(&a, &b).unwrap(), kara.multiply(&a, &b).unwrap());
        }
    }
}
