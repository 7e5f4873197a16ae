use std::cmp::Ordering;

use crate::constants::{Digit, BASE};

/// Length of `a` without its zero top digits.
pub fn count_signif_digits(a: &[Digit]) -> usize {
    a.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}

/// Number of base-`BASE` digits in `small`.
pub fn small_signif_digits(mut small: u64) -> usize {
    let mut count = 0;
    while small != 0 {
        small /= u64::from(BASE);
        count += 1;
    }
    count
}

/// Whether every digit is zero.
pub fn test_zero(a: &[Digit]) -> bool {
    a.iter().all(|&d| d == 0)
}

/// Compare equal-length regions, most significant digit first.
pub fn compare(a: &[Digit], b: &[Digit]) -> Ordering {
    debug_assert_eq!(a.len(), b.len());
    a.iter().rev().cmp(b.iter().rev())
}
