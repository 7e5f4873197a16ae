//! Multiplication strategies.
//!
//! A strategy multiplies digit strings in two phases: submit operands with
//! [`Multiplier::mul_digits`] or [`Multiplier::square_digits`], then read back
//! as much of the product as the caller has room for with
//! [`Multiplier::product_digits`]. The product stays inside the strategy
//! until the next submit, so a strategy is not reentrant: a query always
//! reflects the most recent submit.

mod fft;
mod flex;
mod karatsuba;
mod schoolbook;

pub use fft::FftMul;
pub use flex::{FlexMul2, FlexMul3};
pub use karatsuba::Karatsuba;
pub use schoolbook::Schoolbook;

pub(crate) use schoolbook::mul_into;

use crate::constants::Digit;
use crate::error::ArithError;

/// Capability interface for digit-string multiplication.
pub trait Multiplier {
    /// Multiply `a` by `b` and keep the product.
    fn mul_digits(&mut self, a: &[Digit], b: &[Digit]) -> Result<(), ArithError>;

    /// Square `a` and keep the product.
    fn square_digits(&mut self, a: &[Digit]) -> Result<(), ArithError> {
        self.mul_digits(a, a)
    }

    /// Length of the last product: `a.len() + b.len()`, less one when the top
    /// digit is zero. Zero for empty operands.
    fn product_len(&self) -> usize;

    /// Copy `dst.len()` product digits starting at digit `origin`. Positions
    /// past the end of the product read as zero.
    fn product_digits(&self, dst: &mut [Digit], origin: usize);

    /// Longest product the strategy accepts.
    fn max_product_len(&self) -> usize;

    fn name(&self) -> &'static str;

    /// Multiply and return the whole product.
    fn multiply(&mut self, a: &[Digit], b: &[Digit]) -> Result<Vec<Digit>, ArithError> {
        self.mul_digits(a, b)?;
        let mut out = vec![0; self.product_len()];
        self.product_digits(&mut out, 0);
        Ok(out)
    }
}

impl<M: Multiplier + ?Sized> Multiplier for Box<M> {
    fn mul_digits(&mut self, a: &[Digit], b: &[Digit]) -> Result<(), ArithError> {
        (**self).mul_digits(a, b)
    }

    fn square_digits(&mut self, a: &[Digit]) -> Result<(), ArithError> {
        (**self).square_digits(a)
    }

    fn product_len(&self) -> usize {
        (**self).product_len()
    }

    fn product_digits(&self, dst: &mut [Digit], origin: usize) {
        (**self).product_digits(dst, origin);
    }

    fn max_product_len(&self) -> usize {
        (**self).max_product_len()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Product storage shared by the leaf strategies.
#[derive(Debug, Clone)]
pub(crate) struct Product {
    digits: Vec<Digit>,
    len: usize,
}

impl Product {
    pub(crate) fn with_capacity(max_len: usize) -> Self {
        Self {
            digits: vec![0; max_len],
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// Fail before anything is written if a product of `len` digits won't fit.
    pub(crate) fn reserve(&mut self, len: usize) -> Result<&mut [Digit], ArithError> {
        if len > self.digits.len() {
            return Err(ArithError::CapacityExceeded {
                requested: len,
                capacity: self.digits.len(),
            });
        }
        self.len = 0;
        Ok(&mut self.digits[..len])
    }

    /// Record a product of at most `full_len` digits, dropping one zero top digit.
    pub(crate) fn commit(&mut self, full_len: usize) {
        self.len = if full_len > 0 && self.digits[full_len - 1] == 0 {
            full_len - 1
        } else {
            full_len
        };
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn copy_out(&self, dst: &mut [Digit], origin: usize) {
        let start = origin.min(self.len);
        let end = origin.saturating_add(dst.len()).min(self.len);
        let n = end - start;
        dst[..n].copy_from_slice(&self.digits[start..end]);
        dst[n..].fill(0);
    }
}
