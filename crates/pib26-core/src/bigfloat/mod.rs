//! Signed floating-point numbers with a fixed digit window.
//!
//! A [`BigFloat`] of precision `p` exposes a window of `p + 1 + GUARD_PREC`
//! digits, most significant digit last. Its value is
//! `sum(window[i] * BASE^(exp - (len - 1 - i)))`, so `exp` is the power of
//! `BASE` at the top digit. Outside arithmetic the top digit is nonzero
//! unless the number is zero, which is all-zero digits, exponent 0 and
//! sign `+`.
//!
//! The window is a slice of a larger storage buffer. [`BigFloat::alias_truncate`]
//! hands out a second float over the top digits of the same storage, and
//! [`BigFloat::resize`] slides the bottom edge of the window without moving
//! the top. Both are what let Newton iteration run at reduced precision
//! without copying.

mod add;
mod assign;
mod compare;
mod mul;
mod output;
mod small;

use pib26_memory::Buffer;

use crate::constants::{Digit, BASE, GUARD_PREC};
use crate::error::ArithError;
use crate::primitives::{count_signif_digits, lshift};
use crate::sign::Sign;

/// A signed float over a window of a digit buffer.
pub struct BigFloat<'a> {
    sign: Sign,
    exp: isize,
    prec: usize,
    offset: usize,
    storage: Buffer<'a, Digit>,
}

impl BigFloat<'static> {
    /// A zero with `prec` digits of precision (at least one).
    #[must_use]
    pub fn new(prec: usize) -> Self {
        let prec = prec.max(1);
        Self {
            sign: Sign::Positive,
            exp: 0,
            prec,
            offset: 0,
            storage: Buffer::zeroed(Self::buffer_len(prec)),
        }
    }
}

impl<'a> BigFloat<'a> {
    /// Digits of storage a float of precision `prec` needs.
    #[must_use]
    pub const fn buffer_len(prec: usize) -> usize {
        1 + prec + GUARD_PREC
    }

    /// A zero living in caller storage. The window sits at the bottom of
    /// `storage`.
    pub fn from_view(storage: &'a mut [Digit], prec: usize) -> Result<Self, ArithError> {
        let prec = prec.max(1);
        let needed = Self::buffer_len(prec);
        if storage.len() < needed {
            return Err(ArithError::InsufficientStorage {
                needed,
                available: storage.len(),
            });
        }
        let mut float = Self {
            sign: Sign::Positive,
            exp: 0,
            prec,
            offset: 0,
            storage: Buffer::view(storage),
        };
        float.set_zero();
        Ok(float)
    }

    /// Nominal precision.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.prec
    }

    /// Window length: precision plus the top digit and the guard digits.
    #[must_use]
    pub fn total_len(&self) -> usize {
        Self::buffer_len(self.prec)
    }

    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Power of `BASE` at the most significant digit.
    #[must_use]
    pub fn exponent(&self) -> isize {
        self.exp
    }

    /// The window, least significant digit first.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.storage[self.offset..self.offset + self.total_len()]
    }

    pub(crate) fn window_mut(&mut self) -> &mut [Digit] {
        let len = self.total_len();
        &mut self.storage[self.offset..self.offset + len]
    }

    pub(crate) fn top_digit(&self) -> Digit {
        self.storage[self.offset + self.total_len() - 1]
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.top_digit() == 0
    }

    /// Whether both floats read from the same allocation.
    #[must_use]
    pub fn shares_storage_with(&self, other: &BigFloat<'_>) -> bool {
        self.storage.origin() == other.storage.origin()
    }

    /// Canonical zero.
    pub fn set_zero(&mut self) {
        self.window_mut().fill(0);
        self.sign = Sign::Positive;
        self.exp = 0;
    }

    /// `self = -self`.
    pub fn neg(&mut self) {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
    }

    /// `self = |self|`.
    pub fn abs(&mut self) {
        self.sign = Sign::Positive;
    }

    /// Make `self` the one-digit value `digit * BASE^exp`. A digit that
    /// rounded up to `BASE` becomes 1 at the next exponent.
    pub(crate) fn set_leading(&mut self, digit: Digit, exp: isize, sign: Sign) {
        self.set_zero();
        let (digit, exp) = if digit >= BASE { (1, exp + 1) } else { (digit, exp) };
        if digit == 0 {
            return;
        }
        if let Some(msd) = self.window_mut().last_mut() {
            *msd = digit;
        }
        self.exp = exp;
        self.sign = sign;
    }

    /// A float over the top `prec + 1 + GUARD_PREC` digits of this one's
    /// window, with the same sign and exponent.
    ///
    /// Writes through the alias land in this float's storage; this float's
    /// own sign and exponent are not touched. `prec` is clamped to this
    /// float's precision.
    pub fn alias_truncate(&mut self, prec: usize) -> BigFloat<'_> {
        let prec = prec.clamp(1, self.prec);
        let offset = self.offset + self.prec - prec;
        let len = self.storage.len();
        BigFloat {
            sign: self.sign,
            exp: self.exp,
            prec,
            offset,
            storage: self.storage.sub_view(0..len),
        }
    }

    /// Move the bottom of the window so the precision becomes `prec`. The top
    /// digit stays where it is, so the value keeps its leading digits.
    pub fn resize(&mut self, prec: usize) -> Result<(), ArithError> {
        let top = self.offset + self.prec;
        let offset = top
            .checked_sub(prec)
            .ok_or(ArithError::InsufficientStorage {
                needed: Self::buffer_len(prec),
                available: top + 1 + GUARD_PREC,
            })?;
        self.offset = offset;
        self.prec = prec;
        Ok(())
    }

    /// Shift away zero top digits after cancellation.
    fn renormalize(&mut self) {
        let total = self.total_len();
        let signif = count_signif_digits(self.digits());
        if signif == 0 {
            self.set_zero();
        } else if signif < total {
            let shift = total - signif;
            lshift(self.window_mut(), shift);
            self.exp -= to_isize(shift);
        }
    }

    fn zero_if_empty(&mut self) {
        if self.is_zero() {
            self.set_zero();
        }
    }
}

/// Window lengths are bounded by allocation sizes, which fit in `isize`.
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn to_isize(n: usize) -> isize {
    n as isize
}

/// The top `room` digits of a window, or all of it if shorter.
pub(crate) fn top(window: &[Digit], room: usize) -> &[Digit] {
    &window[window.len().saturating_sub(room)..]
}

impl std::fmt::Debug for BigFloat<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BigFloat")
            .field("sign", &self.sign)
            .field("exp", &self.exp)
            .field("prec", &self.prec)
            .field("digits", &self.digits())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_layout() {
        let f = BigFloat::new(5);
        assert_eq!(f.total_len(), 7);
        assert_eq!(f.digits().len(), 7);
        assert!(f.is_zero());
        assert_eq!(BigFloat::new(0).precision(), 1);
    }

    #[test]
    fn view_checks_room() {
        let mut small = [0; 4];
        assert_eq!(
            BigFloat::from_view(&mut small, 3).unwrap_err(),
            ArithError::InsufficientStorage {
                needed: 5,
                available: 4
            }
        );
        let mut storage = [7; 6];
        let f = BigFloat::from_view(&mut storage, 3).unwrap();
        assert!(f.is_zero());
        assert_eq!(f.digits(), &[0; 5]);
    }

    #[test]
    fn alias_writes_only_its_digits() {
        let mut f = BigFloat::new(6);
        f.window_mut().copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        f.exp = 3;
        f.sign = Sign::Negative;
        {
            let mut alias = f.alias_truncate(2);
            assert_eq!(alias.digits(), &[5, 6, 7, 8]);
            assert_eq!(alias.exponent(), 3);
            alias.window_mut().fill(9);
            alias.exp = -4;
            alias.sign = Sign::Positive;
        }
        assert_eq!(f.digits(), &[1, 2, 3, 4, 9, 9, 9, 9]);
        assert_eq!(f.exponent(), 3);
        assert_eq!(f.sign(), Sign::Negative);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn alias_shares_storage() {
        let mut f = BigFloat::new(4);
        let other = BigFloat::new(4);
        let origin_check = {
            let alias = f.alias_truncate(2);
            (alias.shares_storage_with(&other), alias.storage.origin())
        };
        assert!(!origin_check.0);
        assert_eq!(origin_check.1, f.storage.origin());
    }

    #[test]
    fn resize_keeps_the_top() {
        let mut f = BigFloat::new(6);
        f.window_mut().copy_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
        f.resize(2).unwrap();
        assert_eq!(f.digits(), &[5, 6, 7, 8]);
        f.resize(4).unwrap();
        assert_eq!(f.digits(), &[3, 4, 5, 6, 7, 8]);
        assert!(f.resize(7).is_err());
        f.resize(6).unwrap();
        assert_eq!(f.digits().len(), 8);
    }

    #[test]
    fn leading_digit_carries() {
        let mut f = BigFloat::new(2);
        f.set_leading(BASE, -3, Sign::Negative);
        assert_eq!(f.digits(), &[0, 0, 0, 1]);
        assert_eq!(f.exponent(), -2);
        assert_eq!(f.sign(), Sign::Negative);
        f.set_leading(0, 5, Sign::Negative);
        assert!(f.is_zero());
        assert_eq!(f.sign(), Sign::Positive);
    }

    #[test]
    fn renormalize_shifts_up() {
        let mut f = BigFloat::new(2);
        f.window_mut().copy_from_slice(&[0, 5, 6, 0]);
        f.exp = 2;
        f.renormalize();
        assert_eq!(f.digits(), &[0, 0, 5, 6]);
        assert_eq!(f.exponent(), 1);

        f.window_mut().fill(0);
        f.sign = Sign::Negative;
        f.renormalize();
        assert_eq!(f.sign(), Sign::Positive);
        assert_eq!(f.exponent(), 0);
    }
}
