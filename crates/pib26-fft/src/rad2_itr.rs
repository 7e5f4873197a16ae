//! Iterative radix-2 transform.

use std::sync::Arc;

use crate::complex::Complex;
use crate::error::FftError;
use crate::roots::RootTable;
use crate::transform::{next_pow2, ComplexFft};

/// Iterative radix-2 FFT for power-of-two lengths.
#[derive(Debug, Clone)]
pub struct Rad2Itr {
    table: Arc<RootTable>,
}

impl Rad2Itr {
    #[must_use]
    pub fn new(table: Arc<RootTable>) -> Self {
        Self { table }
    }
}

impl ComplexFft for Rad2Itr {
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
        let len = data.len();
        if len < 2 {
            return;
        }
        let mut step = len;
        let mut stride = self.table.stride(len);
        while step >= 2 {
            let half = step / 2;
            for chunk in data.chunks_exact_mut(step) {
                let (lo, hi) = chunk.split_at_mut(half);
                for (n, (x, y)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                    let w = self.table.at(n * stride);
                    let sum = *x + *y;
                    let diff = *x - *y;
                    *x = sum;
                    *y = diff * w;
                }
            }
            step = half;
            stride *= 2;
        }
    }

    fn inverse_unchecked(&self, data: &mut [Complex]) {
        let len = data.len();
        if len < 2 {
            return;
        }
        let mut step = 2;
        let mut stride = self.table.len() / 2;
        while step <= len {
            let half = step / 2;
            for chunk in data.chunks_exact_mut(step) {
                let (lo, hi) = chunk.split_at_mut(half);
                for (k, (x, y)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
                    let w = self.table.at(k * stride).conj();
                    let t = *y * w;
                    let u = *x;
                    *x = u + t;
                    *y = u - t;
                }
            }
            step *= 2;
            stride /= 2;
        }
    }
}
