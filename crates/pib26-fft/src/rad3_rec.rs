//! Recursive radix-3 transform.
//!
//! Peels one factor of three off lengths of the form `3 * 2^k` and hands the
//! power-of-two thirds to a fallback transform, which also runs every length
//! not divisible by three.

use std::sync::Arc;

use crate::complex::Complex;
use crate::error::FftError;
use crate::rad4_rec::Rad4Rec;
use crate::roots::RootTable;
use crate::transform::ComplexFft;

/// `sqrt(3) / 2`.
const SQRT3_OVER_2: f64 = 0.866_025_403_784_438_6;

/// Radix-3 FFT for lengths `2^k` and `3 * 2^k`.
#[derive(Debug, Clone)]
pub struct Rad3Rec<F = Rad4Rec> {
    table: Arc<RootTable>,
    fallback: F,
}

impl Rad3Rec<Rad4Rec> {
    /// Radix-3 over a radix-4 recursive fallback at the default threshold.
    #[must_use]
    pub fn new(table: Arc<RootTable>) -> Self {
        let fallback = Rad4Rec::new(Arc::clone(&table));
        Self { table, fallback }
    }
}

impl<F: ComplexFft> Rad3Rec<F> {
    /// Radix-3 over an explicit fallback sharing `table`.
    #[must_use]
    pub fn with_fallback(table: Arc<RootTable>, fallback: F) -> Self {
        Self { table, fallback }
    }

    fn forward_rec(&self, data: &mut [Complex]) {
        let len = data.len();
        if len % 3 != 0 {
            self.fallback.forward_unchecked(data);
            return;
        }
        let third = len / 3;
        let stride = self.table.stride(len);
        for n in 0..third {
            let (x0, x1, x2) = (data[n], data[n + third], data[n + 2 * third]);
            let mid = x0 - (x1 + x2).scale(0.5);
            let rot = (x1 - x2).mul_neg_i().scale(SQRT3_OVER_2);
            data[n] = x0 + x1 + x2;
            data[n + third] = (mid + rot) * self.table.at(n * stride);
            data[n + 2 * third] = (mid - rot) * self.table.at(2 * n * stride);
        }
        for part in data.chunks_exact_mut(third) {
            self.forward_rec(part);
        }
    }

    fn inverse_rec(&self, data: &mut [Complex]) {
        let len = data.len();
        if len % 3 != 0 {
            self.fallback.inverse_unchecked(data);
            return;
        }
        let third = len / 3;
        for part in data.chunks_exact_mut(third) {
            self.inverse_rec(part);
        }
        let stride = self.table.stride(len);
        for k in 0..third {
            let t0 = data[k];
            let t1 = data[k + third] * self.table.at(k * stride).conj();
            let t2 = data[k + 2 * third] * self.table.at(2 * k * stride).conj();
            let mid = t0 - (t1 + t2).scale(0.5);
            let rot = (t1 - t2).mul_i().scale(SQRT3_OVER_2);
            data[k] = t0 + t1 + t2;
            data[k + third] = mid + rot;
            data[k + 2 * third] = mid - rot;
        }
    }
}

impl<F: ComplexFft> ComplexFft for Rad3Rec<F> {
    fn table(&self) -> &RootTable {
        &self.table
    }

    fn supports_length(&self, len: usize) -> bool {
        if len % 3 == 0 {
            let third = len / 3;
            third.is_power_of_two() && self.table.divides(len) && self.fallback.supports_length(third)
        } else {
            self.fallback.supports_length(len)
        }
    }

    fn max_fft_size(&self) -> usize {
        let pow2 = self.fallback.max_fft_size();
        if self.table.divides(3 * pow2) {
            3 * pow2
        } else {
            pow2
        }
    }

    /// Walks 1, 2, 3, 4, 6, 8, 12, 16, ... to the first length not below `len`.
    fn nearest_safe_length(&self, len: usize) -> Result<usize, FftError> {
        let pow2 = len.max(1).next_power_of_two();
        let candidate = if pow2 >= 4 && pow2 / 4 * 3 >= len {
            pow2 / 4 * 3
        } else {
            pow2
        };
        self.check_length(candidate).map(|()| candidate)
    }

    fn forward_unchecked(&self, data: &mut [Complex]) {
        self.forward_rec(data);
    }

    fn inverse_unchecked(&self, data: &mut [Complex]) {
        self.inverse_rec(data);
    }
}
