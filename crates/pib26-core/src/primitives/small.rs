use crate::constants::{Digit, TwoDigit, BASE};

use super::compare::test_zero;

const WIDE_BASE: TwoDigit = BASE as TwoDigit;

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn low_digit(value: TwoDigit) -> Digit {
    (value % WIDE_BASE) as Digit
}

/// `r = r + b * small + carry` digit by digit. Returns the carry out of the top.
pub fn mul_add(r: &mut [Digit], b: &[Digit], small: u32) -> TwoDigit {
    debug_assert_eq!(r.len(), b.len());
    let small = TwoDigit::from(small);
    let mut carry: TwoDigit = 0;
    for (dst, &y) in r.iter_mut().zip(b) {
        let acc = TwoDigit::from(*dst) + TwoDigit::from(y) * small + carry;
        *dst = low_digit(acc);
        carry = acc / WIDE_BASE;
    }
    carry
}

/// `r = a * small`. Returns the carry out of the top, which may span two digits.
pub fn mul_by_small(r: &mut [Digit], a: &[Digit], small: u32) -> TwoDigit {
    debug_assert_eq!(r.len(), a.len());
    let small = TwoDigit::from(small);
    let mut carry: TwoDigit = 0;
    for (dst, &x) in r.iter_mut().zip(a) {
        let acc = TwoDigit::from(x) * small + carry;
        *dst = low_digit(acc);
        carry = acc / WIDE_BASE;
    }
    carry
}

/// `r *= small`.
pub fn mul_by_small_assign(r: &mut [Digit], small: u32) -> TwoDigit {
    let small = TwoDigit::from(small);
    let mut carry: TwoDigit = 0;
    for dst in r.iter_mut() {
        let acc = TwoDigit::from(*dst) * small + carry;
        *dst = low_digit(acc);
        carry = acc / WIDE_BASE;
    }
    carry
}

/// Long division `r = (remainder : a) / small`, most significant digit first.
///
/// `remainder` is the value already carried in from digits above `a` and
/// must be below `small`. Returns the final remainder.
pub fn div_by_small(r: &mut [Digit], a: &[Digit], small: u32, remainder: TwoDigit) -> TwoDigit {
    debug_assert_eq!(r.len(), a.len());
    debug_assert!(small != 0 && remainder < TwoDigit::from(small));
    let divisor = TwoDigit::from(small);
    let mut rem = remainder;
    for (dst, &x) in r.iter_mut().zip(a).rev() {
        let acc = rem * WIDE_BASE + TwoDigit::from(x);
        *dst = low_digit(acc / divisor);
        rem = acc % divisor;
    }
    rem
}

/// `r /= small` with an incoming remainder.
pub fn div_by_small_assign(r: &mut [Digit], small: u32, remainder: TwoDigit) -> TwoDigit {
    debug_assert!(small != 0 && remainder < TwoDigit::from(small));
    let divisor = TwoDigit::from(small);
    let mut rem = remainder;
    for dst in r.iter_mut().rev() {
        let acc = rem * WIDE_BASE + TwoDigit::from(*dst);
        *dst = low_digit(acc / divisor);
        rem = acc % divisor;
    }
    rem
}

/// Remainder of `a / small`.
pub fn mod_by_small(a: &[Digit], small: u32) -> TwoDigit {
    debug_assert!(small != 0);
    let divisor = TwoDigit::from(small);
    a.iter()
        .rev()
        .fold(0, |rem, &x| (rem * WIDE_BASE + TwoDigit::from(x)) % divisor)
}

/// Fixed-point division: fill all of `r` with quotient digits of `a / small`,
/// most significant nonzero digit at the top.
///
/// Digits below the end of `a` are taken as zero, so the quotient runs on to
/// the full length of `r`. Returns how many leading zero quotient digits were
/// dropped, which the caller subtracts from its exponent. A zero dividend
/// yields a zero quotient and drops nothing.
pub fn fp_div_by_small(r: &mut [Digit], a: &[Digit], small: u32) -> usize {
    if test_zero(a) {
        r.fill(0);
        return 0;
    }
    fp_div_core(r, Some(a), small)
}

/// In-place [`fp_div_by_small`].
pub fn fp_div_by_small_assign(r: &mut [Digit], small: u32) -> usize {
    if test_zero(r) {
        return 0;
    }
    fp_div_core(r, None, small)
}

/// Reads the dividend from `src`, or from `r` itself when `src` is `None`.
/// Each step reads one digit before writing at most one, so in place the
/// write position never passes below the read position.
fn fp_div_core(r: &mut [Digit], src: Option<&[Digit]>, small: u32) -> usize {
    debug_assert!(small != 0);
    let divisor = TwoDigit::from(small);
    let mut read = src.map_or(r.len(), <[Digit]>::len);
    let mut remaining = r.len();
    let mut leading_zeros = 0;
    let mut outputting = false;
    let mut rem: TwoDigit = 0;
    while remaining > 0 {
        rem *= WIDE_BASE;
        if read > 0 {
            read -= 1;
            let digit = match src {
                Some(a) => a[read],
                None => r[read],
            };
            rem += TwoDigit::from(digit);
        }
        let quotient = rem / divisor;
        rem %= divisor;
        outputting |= quotient != 0;
        if outputting {
            remaining -= 1;
            r[remaining] = low_digit(quotient);
        } else {
            leading_zeros += 1;
        }
    }
    leading_zeros
}

/// Add a machine word at the bottom of `r`. Returns what did not fit.
pub fn add_small(r: &mut [Digit], small: TwoDigit) -> TwoDigit {
    let mut carry = small;
    for dst in r.iter_mut() {
        if carry == 0 {
            break;
        }
        let acc = TwoDigit::from(*dst) + carry;
        *dst = low_digit(acc);
        carry = acc / WIDE_BASE;
    }
    carry
}

/// Write the digits of `small` from the bottom of `r` up, stopping when the
/// value runs out or `r` does. Returns the number of digits written; digits
/// above them are left alone.
pub fn assign_small(r: &mut [Digit], small: TwoDigit) -> usize {
    let mut value = small;
    let mut written = 0;
    for dst in r.iter_mut() {
        if value == 0 {
            break;
        }
        *dst = low_digit(value);
        value /= WIDE_BASE;
        written += 1;
    }
    written
}
