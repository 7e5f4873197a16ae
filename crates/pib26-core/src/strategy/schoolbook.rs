//! Schoolbook O(n^2) multiplication.

use crate::constants::Digit;
use crate::error::ArithError;
use crate::primitives::mul_add;

use super::{Multiplier, Product};

/// `r = a * b`, one fused multiply-add row per digit of `b`.
/// `r.len()` must be `a.len() + b.len()`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mul_into(r: &mut [Digit], a: &[Digit], b: &[Digit]) {
    debug_assert_eq!(r.len(), a.len() + b.len());
    r.fill(0);
    for (j, &digit) in b.iter().enumerate() {
        let carry = mul_add(&mut r[j..j + a.len()], a, digit);
        // Each row's carry is below BASE and lands on a still-zero digit.
        r[j + a.len()] = carry as Digit;
    }
}

/// Schoolbook multiplication with a fixed product capacity.
#[derive(Debug, Clone)]
pub struct Schoolbook {
    product: Product,
}

impl Schoolbook {
    #[must_use]
    pub fn new(max_product: usize) -> Self {
        Self {
            product: Product::with_capacity(max_product),
        }
    }
}

impl Multiplier for Schoolbook {
    fn mul_digits(&mut self, a: &[Digit], b: &[Digit]) -> Result<(), ArithError> {
        let len = if a.is_empty() || b.is_empty() {
            0
        } else {
            a.len() + b.len()
        };
        let out = self.product.reserve(len)?;
        if len > 0 {
            mul_into(out, a, b);
        }
        self.product.commit(len);
        Ok(())
    }

    fn product_len(&self) -> usize {
        self.product.len()
    }

    fn product_digits(&self, dst: &mut [Digit], origin: usize) {
        self.product.copy_out(dst, origin);
    }

    fn max_product_len(&self) -> usize {
        self.product.capacity()
    }

    fn name(&self) -> &'static str {
        "Schoolbook"
    }
}
