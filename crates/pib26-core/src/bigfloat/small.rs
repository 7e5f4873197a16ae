use crate::constants::TwoDigit;
use crate::error::ArithError;
use crate::primitives::{
    assign_small, fp_div_by_small, fp_div_by_small_assign, mul_by_small, mul_by_small_assign,
    rshift, small_signif_digits,
};
use crate::sign::Small;

use super::{to_isize, top, BigFloat};

impl BigFloat<'_> {
    /// Shift a small-multiply carry in at the top.
    fn absorb_small_carry(&mut self, carry: TwoDigit) {
        if carry == 0 {
            return;
        }
        let digits = small_signif_digits(carry);
        let total = self.total_len();
        let window = self.window_mut();
        rshift(window, digits);
        assign_small(&mut window[total - digits..], carry);
        self.exp += to_isize(digits);
    }

    /// `self = a * value`.
    pub fn mul_small(&mut self, a: &BigFloat<'_>, value: impl Into<Small>) {
        let value = value.into();
        if value.magnitude == 0 || a.is_zero() {
            self.set_zero();
            return;
        }
        let total = self.total_len();
        let src = top(a.digits(), total);
        let excess = total - src.len();
        let window = self.window_mut();
        window[..excess].fill(0);
        let carry = mul_by_small(&mut window[excess..], src, value.magnitude);
        self.exp = a.exp;
        self.absorb_small_carry(carry);
        self.sign = a.sign * value.sign;
    }

    /// `self *= value`.
    pub fn mul_small_assign(&mut self, value: impl Into<Small>) {
        let value = value.into();
        if value.magnitude == 0 || self.is_zero() {
            self.set_zero();
            return;
        }
        let carry = mul_by_small_assign(self.window_mut(), value.magnitude);
        self.absorb_small_carry(carry);
        self.sign = self.sign * value.sign;
    }

    /// `self = a / value`. A zero `value` is rejected before `self` is
    /// touched.
    pub fn div_small(
        &mut self,
        a: &BigFloat<'_>,
        value: impl Into<Small>,
    ) -> Result<(), ArithError> {
        let value = value.into();
        if value.magnitude == 0 {
            return Err(ArithError::DivisionByZero);
        }
        let dropped = fp_div_by_small(self.window_mut(), a.digits(), value.magnitude);
        self.exp = a.exp - to_isize(dropped);
        self.sign = a.sign * value.sign;
        self.zero_if_empty();
        Ok(())
    }

    /// `self /= value`.
    pub fn div_small_assign(&mut self, value: impl Into<Small>) -> Result<(), ArithError> {
        let value = value.into();
        if value.magnitude == 0 {
            return Err(ArithError::DivisionByZero);
        }
        let dropped = fp_div_by_small_assign(self.window_mut(), value.magnitude);
        self.exp -= to_isize(dropped);
        self.sign = self.sign * value.sign;
        self.zero_if_empty();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use super::*;
    use crate::constants::{Digit, BASE};
    use crate::sign::Sign;

    #[test]
    fn multiply_carries_into_new_digits() {
        let mut a = BigFloat::new(3);
        a.assign_small(BASE - 1);
        let mut r = BigFloat::new(3);
        r.mul_small(&a, u32::MAX);
        let want = u64::from(BASE - 1) * u64::from(u32::MAX);
        // (BASE - 1)(2^32 - 1) needs three digits
        assert_eq!(r.exponent(), 2);
        let digits = r.digits();
        let value: u64 = digits[2..]
            .iter()
            .rev()
            .fold(0, |acc, &d| acc * u64::from(BASE) + u64::from(d));
        assert_eq!(value, want);
    }

    #[test]
    fn multiply_signs() {
        let mut a = BigFloat::new(2);
        a.assign_small(-3);
        let mut r = BigFloat::new(2);
        r.mul_small(&a, -4);
        assert_eq!(r.compare_small(12), Ordering::Equal);
        r.mul_small_assign(-1);
        assert_eq!(r.compare_small(-12), Ordering::Equal);
        r.mul_small_assign(0);
        assert!(r.is_zero());
        assert_eq!(r.sign(), Sign::Positive);
    }

    #[test]
    fn halving_moves_the_exponent() {
        let mut one = BigFloat::new(2);
        one.assign_small(1);
        let mut half = BigFloat::new(2);
        half.div_small(&one, 2).unwrap();
        assert_eq!(half.exponent(), -1);
        assert_eq!(half.digits(), &[0, 0, 0, BASE / 2]);

        half.div_small_assign(-2).unwrap();
        assert_eq!(half.sign(), Sign::Negative);
        assert_eq!(half.digits(), &[0, 0, 0, BASE / 4]);
        half.mul_small_assign(-4);
        assert_eq!(half.compare_small(1), Ordering::Equal);
    }

    #[test]
    fn thirds_fill_the_window() {
        let mut one = BigFloat::new(3);
        one.assign_small(1);
        one.div_small_assign(3u32).unwrap();
        let third: Digit = BASE / 3;
        assert_eq!(one.digits(), &[third; 5]);
        one.mul_small_assign(3u32);
        // 0.999... with every digit BASE - 1
        assert_eq!(one.digits(), &[BASE - 1; 5]);
        assert_eq!(one.exponent(), -1);
    }

    #[test]
    fn zero_divisor_is_an_error() {
        let mut one = BigFloat::new(2);
        one.assign_small(1);
        let mut r = BigFloat::new(2);
        r.assign_small(9);
        assert_eq!(r.div_small(&one, 0u32), Err(ArithError::DivisionByZero));
        assert_eq!(r.compare_small(9), Ordering::Equal);
        assert_eq!(r.div_small_assign(0), Err(ArithError::DivisionByZero));
        assert_eq!(r.compare_small(9), Ordering::Equal);
    }

    #[test]
    fn dividing_zero_stays_canonical() {
        let zero = BigFloat::new(2);
        let mut r = BigFloat::new(2);
        r.assign_small(9);
        r.div_small(&zero, 7u32).unwrap();
        assert!(r.is_zero());
        assert_eq!(r.exponent(), 0);
    }
}
