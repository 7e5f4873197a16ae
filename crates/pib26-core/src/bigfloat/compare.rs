use std::cmp::Ordering;

use crate::constants::{Digit, DIGS_PER_SMALL};
use crate::primitives::{assign_small, compare, test_zero};
use crate::sign::{Sign, Small};

use super::{to_isize, BigFloat};

/// Compare two windows aligned at their top digit. Digits one window has
/// beyond the other decide a tie.
fn compare_top_aligned(a: &[Digit], b: &[Digit]) -> Ordering {
    let n = a.len().min(b.len());
    let (a_low, a_high) = a.split_at(a.len() - n);
    let (b_low, b_high) = b.split_at(b.len() - n);
    compare(a_high, b_high).then_with(|| {
        if !test_zero(a_low) {
            Ordering::Greater
        } else if !test_zero(b_low) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    })
}

/// Magnitude order of two normalized `(digits, exp)` pairs. Zero sorts below
/// everything else regardless of its exponent.
fn compare_normalized(a: &[Digit], a_exp: isize, b: &[Digit], b_exp: isize) -> Ordering {
    let a_zero = a.last().map_or(true, |&d| d == 0);
    let b_zero = b.last().map_or(true, |&d| d == 0);
    match (a_zero, b_zero) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a_exp
            .cmp(&b_exp)
            .then_with(|| compare_top_aligned(a, b)),
    }
}

fn with_signs(lhs: Sign, rhs: Sign, magnitude: Ordering) -> Ordering {
    match (lhs, rhs) {
        (Sign::Positive, Sign::Negative) => Ordering::Greater,
        (Sign::Negative, Sign::Positive) => Ordering::Less,
        (Sign::Positive, Sign::Positive) => magnitude,
        (Sign::Negative, Sign::Negative) => magnitude.reverse(),
    }
}

impl BigFloat<'_> {
    /// Magnitude comparison.
    #[must_use]
    pub fn compare_magnitude(&self, other: &BigFloat<'_>) -> Ordering {
        compare_normalized(self.digits(), self.exp, other.digits(), other.exp)
    }

    /// Signed comparison.
    #[must_use]
    pub fn compare(&self, other: &BigFloat<'_>) -> Ordering {
        with_signs(self.sign, other.sign, self.compare_magnitude(other))
    }

    /// Signed comparison against a machine word.
    #[must_use]
    pub fn compare_small(&self, value: impl Into<Small>) -> Ordering {
        let value = value.into();
        let mut buf: [Digit; DIGS_PER_SMALL] = [0; DIGS_PER_SMALL];
        let len = assign_small(&mut buf, u64::from(value.magnitude));
        let exp = to_isize(len.max(1)) - 1;
        let sign = if len == 0 { Sign::Positive } else { value.sign };
        let magnitude = compare_normalized(self.digits(), self.exp, &buf[..len.max(1)], exp);
        with_signs(self.sign, sign, magnitude)
    }
}
