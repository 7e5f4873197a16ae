//! The transform interface.

use crate::complex::Complex;
use crate::error::FftError;
use crate::roots::RootTable;

/// Bytes of data cache the iterative kernels try to stay within.
pub const CACHE_SIZE: usize = 262_144;

/// Length below which recursive transforms hand over to an iterative kernel.
///
/// Chosen so the data plus the roots it touches fit in [`CACHE_SIZE`].
pub const ITERATIVE_THRESHOLD: usize = CACHE_SIZE / (2 * std::mem::size_of::<Complex>());

/// A complex FFT over a shared root table.
///
/// Implementors provide the unchecked kernels; callers go through
/// [`ComplexFft::forward`] and [`ComplexFft::inverse`], which reject
/// unsupported lengths before touching the data.
pub trait ComplexFft {
    /// The table the transform draws its roots from.
    fn table(&self) -> &RootTable;

    /// Whether the transform can run at length `len`.
    fn supports_length(&self, len: usize) -> bool;

    /// Largest length the transform can run over its table.
    fn max_fft_size(&self) -> usize;

    /// Smallest supported length not below `len`.
    fn nearest_safe_length(&self, len: usize) -> Result<usize, FftError>;

    /// Forward kernel. `data.len()` is supported.
    fn forward_unchecked(&self, data: &mut [Complex]);

    /// Inverse kernel. `data.len()` is supported.
    fn inverse_unchecked(&self, data: &mut [Complex]);

    /// Forward transform, output in digit-reversed order.
    fn forward(&self, data: &mut [Complex]) -> Result<(), FftError> {
        self.check_length(data.len())?;
        self.forward_unchecked(data);
        Ok(())
    }

    /// Unscaled inverse of [`ComplexFft::forward`].
    fn inverse(&self, data: &mut [Complex]) -> Result<(), FftError> {
        self.check_length(data.len())?;
        self.inverse_unchecked(data);
        Ok(())
    }

    /// Longest sequence of base-`base` digits whose convolution the transform
    /// computes exactly before any safety margin is applied.
    ///
    /// Each output term is a sum of up to `n` products below `base^2`, and a
    /// double carries 53 mantissa bits.
    fn max_num_length_at_base(&self, base: u32) -> usize {
        let max_product = u64::from(base.max(2)).pow(2) - 1;
        let product_bits = 64 - (max_product - 1).leading_zeros();
        1usize << 53u32.saturating_sub(product_bits)
    }

    fn check_length(&self, len: usize) -> Result<(), FftError> {
        if self.supports_length(len) {
            Ok(())
        } else {
            Err(FftError::UnsupportedLength {
                length: len,
                table_size: self.table().len(),
            })
        }
    }
}

/// Smallest power of two not below `len`.
pub(crate) fn next_pow2(len: usize) -> usize {
    len.max(1).next_power_of_two()
}

impl<F: ComplexFft + ?Sized> ComplexFft for Box<F> {
    fn table(&self) -> &RootTable {
        (**self).table()
    }

    fn supports_length(&self, len: usize) -> bool {
        (**self).supports_length(len)
    }

    fn max_fft_size(&self) -> usize {
        (**self).max_fft_size()
    }

    fn nearest_safe_length(&self, len: usize) -> Result<usize, FftError> {
        (**self).nearest_safe_length(len)
    }

    fn forward_unchecked(&self, data: &mut [Complex]) {
        (**self).forward_unchecked(data);
    }

    fn inverse_unchecked(&self, data: &mut [Complex]) {
        (**self).inverse_unchecked(data);
    }
}
