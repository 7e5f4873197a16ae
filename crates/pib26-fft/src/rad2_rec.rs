//! Recursive radix-2 transform.

use std::sync::Arc;

use crate::complex::Complex;
use crate::error::FftError;
use crate::rad2_itr::Rad2Itr;
use crate::roots::RootTable;
use crate::transform::{next_pow2, ComplexFft, ITERATIVE_THRESHOLD};

/// Recursive radix-2 FFT that hands small sub-transforms to [`Rad2Itr`].
#[derive(Debug, Clone)]
pub struct Rad2Rec {
    table: Arc<RootTable>,
    threshold: usize,
    kernel: Rad2Itr,
}

impl Rad2Rec {
    #[must_use]
    pub fn new(table: Arc<RootTable>) -> Self {
        Self::with_threshold(table, ITERATIVE_THRESHOLD)
    }

    #[must_use]
    pub fn with_threshold(table: Arc<RootTable>, threshold: usize) -> Self {
        Self {
            kernel: Rad2Itr::new(Arc::clone(&table)),
            table,
            threshold,
        }
    }

    fn forward_rec(&self, data: &mut [Complex]) {
        let len = data.len();
        if len < 2 || len < self.threshold {
            self.kernel.forward_unchecked(data);
            return;
        }
        let stride = self.table.stride(len);
        let (lo, hi) = data.split_at_mut(len / 2);
        for (n, (x, y)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
            let sum = *x + *y;
            let diff = *x - *y;
            *x = sum;
            *y = diff * self.table.at(n * stride);
        }
        self.forward_rec(lo);
        self.forward_rec(hi);
    }

    fn inverse_rec(&self, data: &mut [Complex]) {
        let len = data.len();
        if len < 2 || len < self.threshold {
            self.kernel.inverse_unchecked(data);
            return;
        }
        let stride = self.table.stride(len);
        let (lo, hi) = data.split_at_mut(len / 2);
        self.inverse_rec(lo);
        self.inverse_rec(hi);
        for (k, (x, y)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
            let t = *y * self.table.at(k * stride).conj();
            let u = *x;
            *x = u + t;
            *y = u - t;
        }
    }
}

impl ComplexFft for Rad2Rec {
    fn table(&self) -> &RootTable {
        &self.table
    }

    fn supports_length(&self, len: usize) -> bool {
        len.is_power_of_two() && self.table.divides(len)
    }

    fn max_fft_size(&self) -> usize {
        self.table.max_pow2()
    }

    fn nearest_safe_length(&self, len: usize) -> Result<usize, FftError> {
        let candidate = next_pow2(len);
        self.check_length(candidate).map(|()| candidate)
    }

    fn forward_unchecked(&self, data: &mut [Complex]) {
        self.forward_rec(data);
    }

    fn inverse_unchecked(&self, data: &mut [Complex]) {
        self.inverse_rec(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::testing::{assert_convolution, assert_round_trip};

    #[test]
    fn round_trips() {
        let table = Arc::new(RootTable::new(1024));
        let fft = Rad2Rec::with_threshold(table, 4);
        for shift in 0..=10 {
            assert_round_trip(&fft, 1 << shift);
        }
    }

    #[test]
    fn identical_to_iterative() {
        let table = Arc::new(RootTable::new(256));
        let recursive = Rad2Rec::with_threshold(Arc::clone(&table), 2);
        let iterative = Rad2Itr::new(table);
        let mut a = crate::transform::testing::sample(256, 5);
        let mut b = a.clone();
        recursive.forward(&mut a).unwrap();
        iterative.forward(&mut b).unwrap();
        for (x, y) in a.iter().zip(&b) {
            assert!((x.re - y.re).abs() < 1e-9 && (x.im - y.im).abs() < 1e-9);
        }
    }

    #[test]
    fn convolves() {
        let table = Arc::new(RootTable::new(128));
        assert_convolution(&Rad2Rec::with_threshold(table, 8), 64);
    }
}
