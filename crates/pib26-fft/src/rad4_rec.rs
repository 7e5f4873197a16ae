//! Recursive radix-4 transform.

use std::sync::Arc;

use crate::complex::Complex;
use crate::error::FftError;
use crate::rad2_itr::Rad2Itr;
use crate::rad4_itr::{is_power_of_four, pass_forward, pass_inverse, Rad4Itr};
use crate::roots::RootTable;
use crate::transform::{next_pow2, ComplexFft, ITERATIVE_THRESHOLD};

/// Recursive radix-4 FFT for power-of-two lengths.
///
/// Splits by four until the sub-transform drops below the iterative
/// threshold, then finishes with the radix-4 kernel on powers of four and the
/// radix-2 kernel otherwise.
#[derive(Debug, Clone)]
pub struct Rad4Rec {
    table: Arc<RootTable>,
    threshold: usize,
    rad2: Rad2Itr,
    rad4: Rad4Itr,
}

impl Rad4Rec {
    #[must_use]
    pub fn new(table: Arc<RootTable>) -> Self {
        Self::with_threshold(table, ITERATIVE_THRESHOLD)
    }

    #[must_use]
    pub fn with_threshold(table: Arc<RootTable>, threshold: usize) -> Self {
        Self {
            rad2: Rad2Itr::new(Arc::clone(&table)),
            rad4: Rad4Itr::new(Arc::clone(&table)),
            table,
            threshold,
        }
    }

    fn uses_kernel(&self, len: usize) -> bool {
        len < self.threshold || len % 4 != 0
    }

    fn forward_rec(&self, data: &mut [Complex]) {
        let len = data.len();
        if self.uses_kernel(len) {
            if is_power_of_four(len) {
                self.rad4.forward_unchecked(data);
            } else {
                self.rad2.forward_unchecked(data);
            }
            return;
        }
        pass_forward(&self.table, data, self.table.stride(len));
        for quarter in data.chunks_exact_mut(len / 4) {
            self.forward_rec(quarter);
        }
    }

    fn inverse_rec(&self, data: &mut [Complex]) {
        let len = data.len();
        if self.uses_kernel(len) {
            if is_power_of_four(len) {
                self.rad4.inverse_unchecked(data);
            } else {
                self.rad2.inverse_unchecked(data);
            }
            return;
        }
        for quarter in data.chunks_exact_mut(len / 4) {
            self.inverse_rec(quarter);
        }
        pass_inverse(&self.table, data, self.table.stride(len));
    }
}

impl ComplexFft for Rad4Rec {
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
