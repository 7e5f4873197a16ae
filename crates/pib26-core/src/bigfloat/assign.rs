use crate::bigint::BigInt;
use crate::constants::Digit;
use crate::primitives::{assign_small, small_signif_digits};
use crate::sign::Small;

use super::{to_isize, top, BigFloat};

impl BigFloat<'_> {
    /// `self = value`.
    pub fn assign_small(&mut self, value: impl Into<Small>) {
        let value = value.into();
        self.uassign_small(value.magnitude);
        if !self.is_zero() {
            self.sign = value.sign;
        }
    }

    /// `self = other`, keeping the top digits that fit.
    pub fn assign(&mut self, other: &BigFloat<'_>) {
        self.uassign(other.digits(), other.exp);
        self.sign = other.sign;
        self.zero_if_empty();
    }

    /// `self = other`, keeping the top digits that fit.
    pub fn assign_int(&mut self, other: &BigInt<'_>) {
        if other.is_zero() {
            self.set_zero();
            return;
        }
        self.uassign(other.digits(), to_isize(other.used()) - 1);
        self.sign = other.sign();
    }

    fn uassign_small(&mut self, value: u32) {
        self.set_zero();
        if value == 0 {
            return;
        }
        let signif = small_signif_digits(u64::from(value));
        let total = self.total_len();
        assign_small(&mut self.window_mut()[total - signif..], u64::from(value));
        self.exp = to_isize(signif) - 1;
    }

    /// Copy `digits` top-aligned into the window, zero-filling below.
    pub(super) fn uassign(&mut self, digits: &[Digit], exp: isize) {
        let total = self.total_len();
        let src = top(digits, total);
        let window = self.window_mut();
        let excess = total - src.len();
        window[..excess].fill(0);
        window[excess..].copy_from_slice(src);
        self.exp = exp;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BASE;
    use crate::sign::Sign;

    #[test]
    fn small_values_sit_at_the_top() {
        let mut f = BigFloat::new(3);
        f.assign_small(7);
        assert_eq!(f.digits(), &[0, 0, 0, 0, 7]);
        assert_eq!(f.exponent(), 0);

        f.assign_small(-(i32::try_from(BASE).unwrap() + 2));
        assert_eq!(f.digits(), &[0, 0, 0, 2, 1]);
        assert_eq!(f.exponent(), 1);
        assert_eq!(f.sign(), Sign::Negative);

        f.assign_small(0);
        assert!(f.is_zero());
        assert_eq!(f.sign(), Sign::Positive);
        assert_eq!(f.exponent(), 0);
    }

    #[test]
    fn assign_crops_or_pads() {
        let mut wide = BigFloat::new(4);
        wide.window_mut().copy_from_slice(&[1, 2, 3, 4, 5, 6]);
        wide.exp = -2;
        wide.sign = Sign::Negative;

        let mut narrow = BigFloat::new(1);
        narrow.assign(&wide);
        assert_eq!(narrow.digits(), &[4, 5, 6]);
        assert_eq!(narrow.exponent(), -2);
        assert_eq!(narrow.sign(), Sign::Negative);

        let mut wider = BigFloat::new(6);
        wider.assign(&narrow);
        assert_eq!(wider.digits(), &[0, 0, 0, 0, 0, 4, 5, 6]);
    }

    #[test]
    fn assign_from_int() {
        let mut n = BigInt::new(4);
        n.assign_small(-5);
        n.mul_small_assign(u32::try_from(BASE).unwrap());
        let mut f = BigFloat::new(2);
        f.assign_int(&n);
        assert_eq!(f.digits(), &[0, 0, 0, 5]);
        assert_eq!(f.exponent(), 1);
        assert_eq!(f.sign(), Sign::Negative);

        f.assign_int(&BigInt::new(2));
        assert!(f.is_zero());
    }
}
