//! Iterative radix-4 transform.

use std::sync::Arc;

use crate::complex::Complex;
use crate::error::FftError;
use crate::roots::RootTable;
use crate::transform::ComplexFft;

/// Iterative radix-4 FFT for power-of-four lengths.
#[derive(Debug, Clone)]
pub struct Rad4Itr {
    table: Arc<RootTable>,
}

pub(crate) fn is_power_of_four(len: usize) -> bool {
    len.is_power_of_two() && len.trailing_zeros() % 2 == 0
}

/// Radix-4 DIF butterfly: a length-4 DFT split into two length-2 DFTs.
#[inline]
pub(crate) fn butterfly_forward(d: [Complex; 4]) -> [Complex; 4] {
    let e0 = d[0] + d[2];
    let e1 = d[0] - d[2];
    let o0 = d[1] + d[3];
    let o1 = d[1] - d[3];
    [e0 + o0, e1 + o1.mul_neg_i(), e0 - o0, e1 - o1.mul_neg_i()]
}

/// Conjugate of [`butterfly_forward`].
#[inline]
pub(crate) fn butterfly_inverse(t: [Complex; 4]) -> [Complex; 4] {
    let e0 = t[0] + t[2];
    let e1 = t[0] - t[2];
    let o0 = t[1] + t[3];
    let o1 = t[1] - t[3];
    [e0 + o0, e1 + o1.mul_i(), e0 - o0, e1 - o1.mul_i()]
}

/// One radix-4 DIF pass over a chunk whose roots sit `stride` apart.
pub(crate) fn pass_forward(table: &RootTable, chunk: &mut [Complex], stride: usize) {
    let quarter = chunk.len() / 4;
    for n in 0..quarter {
        let t = butterfly_forward([
            chunk[n],
            chunk[n + quarter],
            chunk[n + 2 * quarter],
            chunk[n + 3 * quarter],
        ]);
        chunk[n] = t[0];
        chunk[n + quarter] = t[1] * table.at(n * stride);
        chunk[n + 2 * quarter] = t[2] * table.at(2 * n * stride);
        chunk[n + 3 * quarter] = t[3] * table.at(3 * n * stride);
    }
}

/// Undo [`pass_forward`] up to a factor of 4.
pub(crate) fn pass_inverse(table: &RootTable, chunk: &mut [Complex], stride: usize) {
    let quarter = chunk.len() / 4;
    for k in 0..quarter {
        let d = butterfly_inverse([
            chunk[k],
            chunk[k + quarter] * table.at(k * stride).conj(),
            chunk[k + 2 * quarter] * table.at(2 * k * stride).conj(),
            chunk[k + 3 * quarter] * table.at(3 * k * stride).conj(),
        ]);
        chunk[k] = d[0];
        chunk[k + quarter] = d[1];
        chunk[k + 2 * quarter] = d[2];
        chunk[k + 3 * quarter] = d[3];
    }
}

impl Rad4Itr {
    #[must_use]
    pub fn new(table: Arc<RootTable>) -> Self {
        Self { table }
    }
}

impl ComplexFft for Rad4Itr {
    fn table(&self) -> &RootTable {
        &self.table
    }

    fn supports_length(&self, len: usize) -> bool {
        is_power_of_four(len) && self.table.divides(len)
    }

    fn max_fft_size(&self) -> usize {
        let pow2 = self.table.max_pow2();
        if is_power_of_four(pow2) {
            pow2
        } else {
            pow2 / 2
        }
    }

    fn nearest_safe_length(&self, len: usize) -> Result<usize, FftError> {
        let mut candidate = 1;
        while candidate < len {
            candidate *= 4;
        }
        self.check_length(candidate).map(|()| candidate)
    }

    fn forward_unchecked(&self, data: &mut [Complex]) {
        let len = data.len();
        let mut step = len;
        let mut stride = self.table.stride(len);
        while step >= 4 {
            for chunk in data.chunks_exact_mut(step) {
                pass_forward(&self.table, chunk, stride);
            }
            step /= 4;
            stride *= 4;
        }
    }

    fn inverse_unchecked(&self, data: &mut [Complex]) {
        let len = data.len();
        let mut step = 4;
        while step <= len {
            let stride = self.table.stride(step);
            for chunk in data.chunks_exact_mut(step) {
                pass_inverse(&self.table, chunk, stride);
            }
            step *= 4;
        }
    }
}
