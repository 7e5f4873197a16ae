//! Signed arbitrary-length integers.
//!
//! A [`BigInt`] never grows: its capacity is fixed at construction and any
//! result that does not fit is truncated to its low digits. Small division is
//! the exception, see [`BigInt::div_small`].

use std::cmp::Ordering;
use std::fmt;

use pib26_memory::Buffer;

use crate::b26::write_b26;
use crate::constants::{Digit, DIGS_PER_DIG, DIGS_PER_SMALL};
use crate::error::ArithError;
use crate::primitives::{
    add, add_assign, assign_small, compare, copy, count_signif_digits, div_by_small,
    div_by_small_assign, mod_by_small, mul_by_small, mul_by_small_assign, neg, neg_assign,
    propagate_borrow, propagate_borrow_assign, propagate_carry, propagate_carry_assign, sub,
    sub_assign,
};
use crate::sign::{Sign, Small};
use crate::strategy::Multiplier;

/// A signed integer stored as little-endian digits in a fixed-size buffer.
pub struct BigInt<'a> {
    sign: Sign,
    used: usize,
    digits: Buffer<'a, Digit>,
}

impl BigInt<'static> {
    /// A zero with room for `capacity` digits.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            sign: Sign::Positive,
            used: 0,
            digits: Buffer::zeroed(capacity),
        }
    }
}

impl<'a> BigInt<'a> {
    /// A zero living in caller storage.
    pub fn from_view(storage: &'a mut [Digit]) -> Self {
        Self {
            sign: Sign::Positive,
            used: 0,
            digits: Buffer::view(storage),
        }
    }

    /// A zero living in caller storage, which must hold at least `capacity`
    /// digits. Only the first `capacity` digits are used.
    pub fn from_view_with_capacity(
        storage: &'a mut [Digit],
        capacity: usize,
    ) -> Result<Self, ArithError> {
        if storage.len() < capacity {
            return Err(ArithError::InsufficientStorage {
                needed: capacity,
                available: storage.len(),
            });
        }
        Ok(Self::from_view(&mut storage[..capacity]))
    }

    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Significant digits.
    #[must_use]
    pub fn used(&self) -> usize {
        self.used
    }

    /// Allocated digits.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// The significant digits, least significant first.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits[..self.used]
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.used == 0
    }

    /// Whether both numbers live in the same allocation.
    #[must_use]
    pub fn shares_storage_with(&self, other: &BigInt<'_>) -> bool {
        self.digits.origin() == other.digits.origin()
    }

    fn normalize(&mut self) {
        if self.used == 0 {
            self.sign = Sign::Positive;
        }
    }

    fn recount(&mut self) {
        self.used = count_signif_digits(&self.digits[..self.used]);
        self.normalize();
    }

    pub fn set_zero(&mut self) {
        self.used = 0;
        self.sign = Sign::Positive;
    }

    /// `self = value`, truncated to capacity.
    pub fn assign_small(&mut self, value: impl Into<Small>) {
        let value = value.into();
        self.used = assign_small(&mut self.digits, u64::from(value.magnitude));
        self.sign = value.sign;
        self.normalize();
    }

    /// `self = other`, truncated to capacity.
    pub fn assign(&mut self, other: &BigInt<'_>) {
        self.used = copy(&mut self.digits, other.digits());
        self.sign = other.sign;
        self.recount();
    }

    /// `self = ±digits`, little-endian, truncated to capacity.
    pub fn assign_digits(&mut self, digits: &[Digit], sign: Sign) {
        self.used = copy(&mut self.digits, digits);
        self.sign = sign;
        self.recount();
    }

    /// Magnitude comparison.
    #[must_use]
    pub fn compare_magnitude(&self, other: &BigInt<'_>) -> Ordering {
        self.used
            .cmp(&other.used)
            .then_with(|| compare(self.digits(), other.digits()))
    }

    /// Signed comparison.
    #[must_use]
    pub fn compare(&self, other: &BigInt<'_>) -> Ordering {
        signed_order(self.sign, other.sign, || self.compare_magnitude(other))
    }

    /// Signed comparison against a machine word.
    #[must_use]
    pub fn compare_small(&self, value: impl Into<Small>) -> Ordering {
        let value = value.into();
        let mut buf: [Digit; DIGS_PER_SMALL] = [0; DIGS_PER_SMALL];
        let len = assign_small(&mut buf, u64::from(value.magnitude));
        // Zero is always positive.
        let other_sign = if len == 0 { Sign::Positive } else { value.sign };
        signed_order(self.sign, other_sign, || {
            self.used
                .cmp(&len)
                .then_with(|| compare(self.digits(), &buf[..len]))
        })
    }

    fn uadd(&mut self, a: &BigInt<'_>, b: &BigInt<'_>) {
        let cap = self.capacity();
        let (long, short) = if a.used >= b.used { (a, b) } else { (b, a) };
        let long_len = long.used.min(cap);
        let short_len = short.used.min(cap);
        let dst = &mut self.digits[..];
        let carry = add(
            &mut dst[..short_len],
            &long.digits[..short_len],
            &short.digits[..short_len],
            false,
        );
        let carry = propagate_carry(
            &mut dst[short_len..long_len],
            &long.digits[short_len..long_len],
            carry,
        );
        self.used = long_len;
        if carry && self.used < cap {
            self.digits[self.used] = 1;
            self.used += 1;
        }
    }

    fn uadd_assign(&mut self, b: &BigInt<'_>) {
        let cap = self.capacity();
        let b_len = b.used.min(cap);
        let used = self.used;
        let dst = &mut self.digits[..];
        let carry = if used >= b_len {
            let carry = add_assign(&mut dst[..b_len], &b.digits[..b_len], false);
            propagate_carry_assign(&mut dst[b_len..used], carry)
        } else {
            let carry = add_assign(&mut dst[..used], &b.digits[..used], false);
            propagate_carry(&mut dst[used..b_len], &b.digits[used..b_len], carry)
        };
        self.used = used.max(b_len);
        if carry && self.used < cap {
            self.digits[self.used] = 1;
            self.used += 1;
        }
    }

    /// `|a| - |b|`, with the sign of the difference.
    fn usub(&mut self, a: &BigInt<'_>, b: &BigInt<'_>) {
        let cap = self.capacity();
        let a_len = a.used.min(cap);
        let b_len = b.used.min(cap);
        let overlap = a_len.min(b_len);
        let dst = &mut self.digits[..];
        let mut borrow = sub(
            &mut dst[..overlap],
            &a.digits[..overlap],
            &b.digits[..overlap],
            false,
        );
        if a_len > b_len {
            borrow = propagate_borrow(&mut dst[overlap..a_len], &a.digits[overlap..a_len], borrow);
        } else if b_len > a_len {
            borrow = neg(&mut dst[overlap..b_len], &b.digits[overlap..b_len], borrow);
        }
        self.used = a_len.max(b_len);
        self.finish_sub(borrow);
    }

    /// `|self| - |b|`, with the sign of the difference.
    fn usub_assign(&mut self, b: &BigInt<'_>) {
        let cap = self.capacity();
        let b_len = b.used.min(cap);
        let used = self.used;
        let overlap = used.min(b_len);
        let dst = &mut self.digits[..];
        let mut borrow = sub_assign(&mut dst[..overlap], &b.digits[..overlap], false);
        if used > b_len {
            borrow = propagate_borrow_assign(&mut dst[overlap..used], borrow);
        } else if b_len > used {
            borrow = neg(&mut dst[overlap..b_len], &b.digits[overlap..b_len], borrow);
        }
        self.used = used.max(b_len);
        self.finish_sub(borrow);
    }

    /// A final borrow means the difference wrapped: complement it back.
    fn finish_sub(&mut self, borrow: bool) {
        self.sign = if borrow {
            neg_assign(&mut self.digits[..self.used], false);
            Sign::Negative
        } else {
            Sign::Positive
        };
        self.recount();
    }

    fn add_signed(&mut self, a: &BigInt<'_>, b: &BigInt<'_>, b_sign: Sign) {
        if a.sign == b_sign {
            self.uadd(a, b);
            self.sign = a.sign;
            self.normalize();
        } else if a.sign == Sign::Positive {
            self.usub(a, b);
        } else {
            self.usub(b, a);
        }
    }

    fn add_assign_signed(&mut self, b: &BigInt<'_>, b_sign: Sign) {
        if self.sign == b_sign {
            self.uadd_assign(b);
            self.normalize();
        } else {
            let was = self.sign;
            self.usub_assign(b);
            if was == Sign::Negative && self.used > 0 {
                self.sign = -self.sign;
            }
        }
    }

    /// `self = a + b`.
    pub fn add(&mut self, a: &BigInt<'_>, b: &BigInt<'_>) {
        self.add_signed(a, b, b.sign);
    }

    /// `self += b`.
    pub fn add_assign(&mut self, b: &BigInt<'_>) {
        self.add_assign_signed(b, b.sign);
    }

    /// `self = a - b`.
    pub fn sub(&mut self, a: &BigInt<'_>, b: &BigInt<'_>) {
        self.add_signed(a, b, -b.sign);
    }

    /// `self -= b`.
    pub fn sub_assign(&mut self, b: &BigInt<'_>) {
        self.add_assign_signed(b, -b.sign);
    }

    /// `self = -self`.
    pub fn neg(&mut self) {
        if self.used > 0 {
            self.sign = -self.sign;
        }
    }

    /// Copy the low digits of the strategy's last product.
    fn take_product(&mut self, strategy: &dyn Multiplier, sign: Sign) {
        let len = strategy.product_len().min(self.capacity());
        strategy.product_digits(&mut self.digits[..len], 0);
        self.used = len;
        self.sign = sign;
        self.recount();
    }

    /// `self = a * b`, keeping the low digits that fit.
    pub fn mul(
        &mut self,
        a: &BigInt<'_>,
        b: &BigInt<'_>,
        strategy: &mut dyn Multiplier,
    ) -> Result<(), ArithError> {
        strategy.mul_digits(a.digits(), b.digits())?;
        self.take_product(strategy, a.sign * b.sign);
        Ok(())
    }

    /// `self *= b`.
    pub fn mul_assign(
        &mut self,
        b: &BigInt<'_>,
        strategy: &mut dyn Multiplier,
    ) -> Result<(), ArithError> {
        strategy.mul_digits(self.digits(), b.digits())?;
        let sign = self.sign * b.sign;
        self.take_product(strategy, sign);
        Ok(())
    }

    /// `self = a * a`.
    pub fn square(&mut self, a: &BigInt<'_>, strategy: &mut dyn Multiplier) -> Result<(), ArithError> {
        strategy.square_digits(a.digits())?;
        self.take_product(strategy, Sign::Positive);
        Ok(())
    }

    /// `self *= self`.
    pub fn square_assign(&mut self, strategy: &mut dyn Multiplier) -> Result<(), ArithError> {
        strategy.square_digits(self.digits())?;
        self.take_product(strategy, Sign::Positive);
        Ok(())
    }

    /// `self = a * value`, keeping the low digits that fit.
    pub fn mul_small(&mut self, a: &BigInt<'_>, value: impl Into<Small>) {
        let value = value.into();
        if value.magnitude == 0 || a.used == 0 {
            self.set_zero();
            return;
        }
        let len = a.used.min(self.capacity());
        let carry = mul_by_small(&mut self.digits[..len], &a.digits[..len], value.magnitude);
        self.used = len + assign_small(&mut self.digits[len..], carry);
        self.sign = a.sign * value.sign;
        self.recount();
    }

    /// `self *= value`.
    pub fn mul_small_assign(&mut self, value: impl Into<Small>) {
        let value = value.into();
        if value.magnitude == 0 || self.used == 0 {
            self.set_zero();
            return;
        }
        let len = self.used;
        let carry = mul_by_small_assign(&mut self.digits[..len], value.magnitude);
        self.used = len + assign_small(&mut self.digits[len..], carry);
        self.sign = self.sign * value.sign;
        self.recount();
    }

    /// `self = a / value`, truncated toward zero.
    ///
    /// When `a` is longer than `self`, the overhanging high digits of `a` are
    /// first reduced modulo `value`, so the retained digits are the true low
    /// digits of the quotient.
    ///
    /// Dividing by zero fails with [`ArithError::DivisionByZero`] and leaves
    /// `self` untouched.
    pub fn div_small(
        &mut self,
        a: &BigInt<'_>,
        value: impl Into<Small>,
    ) -> Result<(), ArithError> {
        let value = value.into();
        if value.magnitude == 0 {
            return Err(ArithError::DivisionByZero);
        }
        let cap = self.capacity();
        if cap >= a.used {
            div_by_small(&mut self.digits[..a.used], a.digits(), value.magnitude, 0);
            self.used = a.used;
        } else {
            let rem = mod_by_small(&a.digits[cap..a.used], value.magnitude);
            div_by_small(&mut self.digits[..cap], &a.digits[..cap], value.magnitude, rem);
            self.used = cap;
        }
        self.sign = a.sign * value.sign;
        self.recount();
        Ok(())
    }

    /// `self /= value`.
    pub fn div_small_assign(&mut self, value: impl Into<Small>) -> Result<(), ArithError> {
        let value = value.into();
        if value.magnitude == 0 {
            return Err(ArithError::DivisionByZero);
        }
        let used = self.used;
        div_by_small_assign(&mut self.digits[..used], value.magnitude, 0);
        self.sign = self.sign * value.sign;
        self.recount();
        Ok(())
    }
}

/// Order two signed values given the ordering of their magnitudes.
fn signed_order(lhs: Sign, rhs: Sign, magnitude: impl FnOnce() -> Ordering) -> Ordering {
    match (lhs, rhs) {
        (Sign::Positive, Sign::Negative) => Ordering::Greater,
        (Sign::Negative, Sign::Positive) => Ordering::Less,
        (Sign::Positive, Sign::Positive) => magnitude(),
        (Sign::Negative, Sign::Negative) => magnitude().reverse(),
    }
}

impl fmt::Display for BigInt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((&top, rest)) = self.digits().split_last() else {
            return f.write_str("A");
        };
        write!(f, "{}", self.sign.symbol())?;
        write_b26(f, i64::from(top), 0)?;
        for &digit in rest.iter().rev() {
            write_b26(f, i64::from(digit), DIGS_PER_DIG)?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigInt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BigInt")
            .field("sign", &self.sign)
            .field("used", &self.used)
            .field("capacity", &self.capacity())
            .field("digits", &self.digits())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BASE;
    use crate::strategy::{Karatsuba, Schoolbook};

    fn int(capacity: usize, digits: &[Digit], sign: Sign) -> BigInt<'static> {
        let mut n = BigInt::new(capacity);
        n.used = copy(&mut n.digits, digits);
        n.sign = sign;
        n.recount();
        n
    }

    fn small(v: i32) -> BigInt<'static> {
        let mut n = BigInt::new(4);
        n.assign_small(v);
        n
    }

    #[test]
    fn three_times_five() {
        let mut mul = Schoolbook::new(16);
        let mut r = BigInt::new(4);
        r.mul(&small(3), &small(5), &mut mul).unwrap();
        assert_eq!(r.used(), 1);
        assert_eq!(r.digits(), &[15]);
        assert_eq!(r.sign(), Sign::Positive);
    }

    #[test]
    fn zero_assignment_is_positive() {
        let mut n = small(-4);
        assert_eq!(n.sign(), Sign::Negative);
        n.assign_small(0);
        assert!(n.is_zero());
        assert_eq!(n.sign(), Sign::Positive);
        n.assign_small(-0);
        assert_eq!(n.sign(), Sign::Positive);
    }

    #[test]
    fn self_minus_self_is_canonical_zero() {
        let a = int(4, &[1, 2, 3], Sign::Negative);
        let mut r = BigInt::new(4);
        r.sub(&a, &a);
        assert!(r.is_zero());
        assert_eq!(r.sign(), Sign::Positive);

        let mut b = int(4, &[1, 2, 3], Sign::Negative);
        b.sub_assign(&a);
        assert!(b.is_zero());
        assert_eq!(b.sign(), Sign::Positive);
    }

    #[test]
    fn four_sign_cases() {
        let cases = [(7, 5), (7, -5), (-7, 5), (-7, -5), (5, 7), (5, -7), (-5, 7), (-5, -7)];
        for (x, y) in cases {
            let mut r = BigInt::new(4);
            r.add(&small(x), &small(y));
            assert_eq!(r.compare_small(x + y), Ordering::Equal, "{x} + {y}");
            r.sub(&small(x), &small(y));
            assert_eq!(r.compare_small(x - y), Ordering::Equal, "{x} - {y}");

            let mut acc = small(x);
            acc.add_assign(&small(y));
            assert_eq!(acc.compare_small(x + y), Ordering::Equal, "{x} += {y}");
            let mut acc = small(x);
            acc.sub_assign(&small(y));
            assert_eq!(acc.compare_small(x - y), Ordering::Equal, "{x} -= {y}");
        }
    }

    #[test]
    fn borrow_across_digits() {
        // BASE^2 - 1 = [TOP, TOP]
        let a = int(4, &[0, 0, 1], Sign::Positive);
        let b = int(4, &[1], Sign::Positive);
        let mut r = BigInt::new(4);
        r.sub(&a, &b);
        assert_eq!(r.digits(), &[BASE - 1, BASE - 1]);
        r.sub(&b, &a);
        assert_eq!(r.digits(), &[BASE - 1, BASE - 1]);
        assert_eq!(r.sign(), Sign::Negative);
    }

    #[test]
    fn compare_is_antisymmetric() {
        let values = [
            int(4, &[5, 1], Sign::Positive),
            int(4, &[5, 1], Sign::Negative),
            int(4, &[7], Sign::Negative),
            int(4, &[9, 9, 9], Sign::Negative),
            BigInt::new(4),
        ];
        for a in &values {
            for b in &values {
                assert_eq!(a.compare(b), b.compare(a).reverse());
            }
        }
        assert_eq!(values[2].compare(&values[3]), Ordering::Greater);
        assert_eq!(values[4].compare(&values[2]), Ordering::Greater);
    }

    #[test]
    fn compare_small_orders_by_sign_then_magnitude() {
        assert_eq!(small(-3).compare_small(-2), Ordering::Less);
        assert_eq!(small(3).compare_small(-20), Ordering::Greater);
        assert_eq!(BigInt::new(2).compare_small(0), Ordering::Equal);
        let big = int(4, &[0, 0, 1], Sign::Positive);
        assert_eq!(big.compare_small(u32::MAX), Ordering::Greater);
    }

    #[test]
    fn add_drops_carry_without_room() {
        let top = int(2, &[BASE - 1, BASE - 1], Sign::Positive);
        let one = small(1);
        let mut r = BigInt::new(2);
        r.add(&top, &one);
        assert!(r.is_zero());

        let mut wide = BigInt::new(3);
        wide.add(&top, &one);
        assert_eq!(wide.digits(), &[0, 0, 1]);
    }

    #[test]
    fn product_truncates_to_low_digits() {
        let mut mul = Karatsuba::new(64);
        let a = int(8, &[3, 1, 4, 1, 5], Sign::Positive);
        let b = int(8, &[9, 2, 6, 5, 3], Sign::Negative);
        let full = mul.multiply(a.digits(), b.digits()).unwrap();
        for m in 1..=full.len() {
            let mut r = BigInt::new(m);
            r.mul(&a, &b, &mut mul).unwrap();
            let want = &full[..count_signif_digits(&full[..m])];
            assert_eq!(r.digits(), want, "m = {m}");
        }
    }

    #[test]
    fn mul_assign_and_square_agree() {
        let mut mul = Schoolbook::new(64);
        let a = int(8, &[12, 34, 56], Sign::Negative);
        let mut sq = BigInt::new(8);
        sq.square(&a, &mut mul).unwrap();
        let mut prod = int(8, &[12, 34, 56], Sign::Negative);
        prod.mul_assign(&a, &mut mul).unwrap();
        assert_eq!(sq.compare(&prod), Ordering::Equal);
        assert_eq!(sq.sign(), Sign::Positive);
        let mut again = int(8, &[12, 34, 56], Sign::Positive);
        again.square_assign(&mut mul).unwrap();
        assert_eq!(again.compare(&sq), Ordering::Equal);
    }

    #[test]
    fn small_multiply_signs_and_truncation() {
        let mut r = BigInt::new(4);
        r.mul_small(&small(-6), -7);
        assert_eq!(r.compare_small(42), Ordering::Equal);
        r.mul_small(&small(6), -7);
        assert_eq!(r.compare_small(-42), Ordering::Equal);
        r.mul_small(&small(6), 0);
        assert!(r.is_zero());

        let a = int(4, &[BASE - 1, BASE - 1, BASE - 1], Sign::Positive);
        let mut narrow = BigInt::new(2);
        narrow.mul_small(&a, 2u32);
        // 2 (BASE^3 - 1) mod BASE^2 = BASE^2 - 2
        assert_eq!(narrow.digits(), &[BASE - 2, BASE - 1]);

        let mut acc = small(9);
        acc.mul_small_assign(u32::MAX);
        assert_eq!(acc.used(), 2);
        acc.div_small_assign(u32::MAX).unwrap();
        assert_eq!(acc.compare_small(9), Ordering::Equal);
    }

    #[test]
    fn small_division_reduces_overhang() {
        // a = 7 BASE^2 + 3 BASE + 5, divided by 3 with only one digit of room.
        let a = int(4, &[5, 3, 7], Sign::Positive);
        let mut r = BigInt::new(1);
        r.div_small(&a, 3u32).unwrap();
        let value = 7 * u64::from(BASE).pow(2) + 3 * u64::from(BASE) + 5;
        let want = (value / 3) % u64::from(BASE);
        assert_eq!(r.digits(), &[Digit::try_from(want).unwrap()]);

        let mut q = BigInt::new(4);
        q.div_small(&small(-7), 2).unwrap();
        assert_eq!(q.compare_small(-3), Ordering::Equal);
        q.div_small(&small(-7), -2).unwrap();
        assert_eq!(q.compare_small(3), Ordering::Equal);
        q.div_small(&small(1), 2).unwrap();
        assert_eq!(q.sign(), Sign::Positive);
    }

    #[test]
    fn zero_divisor_is_an_error() {
        let a = small(-7);
        let mut q = small(5);
        assert_eq!(q.div_small(&a, 0u32), Err(ArithError::DivisionByZero));
        assert_eq!(q.compare_small(5), Ordering::Equal);
        assert_eq!(q.div_small_assign(0), Err(ArithError::DivisionByZero));
        assert_eq!(q.compare_small(5), Ordering::Equal);
    }

    #[test]
    fn views_share_an_arena() {
        let mut storage = [0; 8];
        let (lo, hi) = storage.split_at_mut(4);
        let mut a = BigInt::from_view(lo);
        let mut b = BigInt::from_view(hi);
        a.assign_small(10);
        b.assign_small(32);
        a.add_assign(&b);
        assert_eq!(a.digits(), &[42]);
        assert!(BigInt::from_view_with_capacity(&mut [0; 2], 3).is_err());
    }

    #[test]
    fn assign_truncates() {
        let a = int(4, &[1, 0, 3], Sign::Negative);
        let mut r = BigInt::new(2);
        r.assign(&a);
        assert_eq!(r.digits(), &[1]);
        assert_eq!(r.sign(), Sign::Negative);
        let mut z = BigInt::new(1);
        z.assign(&int(4, &[0, 5], Sign::Negative));
        assert!(z.is_zero());
        assert_eq!(z.sign(), Sign::Positive);
    }

    #[test]
    fn display_in_base_26() {
        assert_eq!(BigInt::new(2).to_string(), "A");
        assert_eq!(small(27).to_string(), "+BB");
        assert_eq!(int(4, &[1, 2], Sign::Negative).to_string(), "-CAAAB");
    }
}
