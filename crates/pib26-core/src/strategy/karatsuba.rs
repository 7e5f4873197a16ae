//! Karatsuba multiplication.
//!
//! Splits `u = a B^h + b` and `v = c B^h + d` and forms the product from the
//! three sub-products `(a + b)(c + d)`, `ac` and `bd`. All arithmetic happens
//! in caller-provided slices; the recursion never allocates.

use crate::constants::Digit;
use crate::error::ArithError;
use crate::primitives::{propagate_add, propagate_carry_assign, propagate_sub, uneven_add};

use super::{mul_into, Multiplier, Product};

/// Operands at or below this many digits go straight to schoolbook.
const BASE_CASE_LEN: usize = 4;

/// Slack on top of the scratch bound for odd splits.
const SCRATCH_SLACK: usize = 128;

/// Karatsuba multiplication with a fixed product capacity.
#[derive(Debug, Clone)]
pub struct Karatsuba {
    product: Product,
    work: Vec<Digit>,
}

impl Karatsuba {
    #[must_use]
    pub fn new(max_product: usize) -> Self {
        Self {
            product: Product::with_capacity(max_product),
            work: vec![0; 2 * max_product + SCRATCH_SLACK],
        }
    }
}

/// `ans = u * v` with `ans.len() == u.len() + v.len()`, using `work` as scratch.
pub(crate) fn recursive_mul(ans: &mut [Digit], u: &[Digit], v: &[Digit], work: &mut [Digit]) {
    let (u, v) = if u.len() >= v.len() { (u, v) } else { (v, u) };
    debug_assert_eq!(ans.len(), u.len() + v.len());
    if v.is_empty() {
        ans.fill(0);
        return;
    }
    if u.len() <= BASE_CASE_LEN {
        mul_into(ans, u, v);
        return;
    }

    let half = u.len().div_ceil(2);
    let (b, a) = u.split_at(half);

    if v.len() <= half {
        // v fits below the split: u v = b v + (a v) B^h.
        recursive_mul(&mut ans[..half + v.len()], b, v, work);
        ans[half + v.len()..].fill(0);
        let av_len = a.len() + v.len();
        let (av, rest) = work.split_at_mut(av_len);
        recursive_mul(av, a, v, rest);
        propagate_add(&mut ans[half..], av);
        return;
    }

    let (d, c) = v.split_at(half);
    ans.fill(0);

    // (a + b)(c + d) into ans at B^h; the sums keep their carries aside.
    let (sums, rest) = work.split_at_mut(2 * half);
    let (sum1, sum2) = sums.split_at_mut(half);
    let carry1 = uneven_add(sum1, b, a);
    let carry2 = uneven_add(sum2, d, c);
    recursive_mul(&mut ans[half..3 * half], sum1, sum2, rest);
    if carry1 {
        propagate_add(&mut ans[2 * half..], sum2);
    }
    if carry2 {
        propagate_add(&mut ans[2 * half..], sum1);
    }
    if carry1 && carry2 {
        propagate_carry_assign(&mut ans[3 * half..], true);
    }

    // ac at B^2h, and out of the middle term.
    let ac_len = a.len() + c.len();
    let (ac, rest) = work.split_at_mut(ac_len);
    recursive_mul(ac, a, c, rest);
    propagate_sub(&mut ans[half..], ac);
    propagate_add(&mut ans[2 * half..], ac);

    // bd at B^0, and out of the middle term.
    let (bd, rest) = work.split_at_mut(2 * half);
    recursive_mul(bd, b, d, rest);
    propagate_add(ans, bd);
    propagate_sub(&mut ans[half..], bd);
}

impl Multiplier for Karatsuba {
    fn mul_digits(&mut self, a: &[Digit], b: &[Digit]) -> Result<(), ArithError> {
        let len = if a.is_empty() || b.is_empty() {
            0
        } else {
            a.len() + b.len()
        };
        let out = self.product.reserve(len)?;
        if len > 0 {
            recursive_mul(out, a, b, &mut self.work);
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
        "Karatsuba"
    }
}
