//! Base-26 letter rendering.
//!
//! Output digits are the letters `A..=Z` for `0..=25`, so zero prints as `A`.

use std::fmt::Write;

use crate::constants::BASE_MINOR;

/// Letter for one base-26 digit.
///
/// # Panics
///
/// Debug builds panic when `digit >= 26`.
#[must_use]
pub fn b26_digit(digit: u32) -> char {
    debug_assert!(digit < BASE_MINOR);
    u8::try_from(digit).map_or('?', |d| char::from(b'A' + d))
}

/// `value` in base 26, most significant letter first, left-padded with `A` to
/// at least `padding` letters. Negative values get a leading `-`.
#[must_use]
pub fn format_b26(value: i64, padding: usize) -> String {
    let mut out = String::new();
    push_b26(&mut out, value, padding);
    out
}

/// Append [`format_b26`] output to `out`.
pub fn push_b26(out: &mut String, value: i64, padding: usize) {
    let mut magnitude = value.unsigned_abs();
    let mut letters = Vec::new();
    while magnitude != 0 {
        let digit = u32::try_from(magnitude % u64::from(BASE_MINOR)).unwrap_or(0);
        letters.push(b26_digit(digit));
        magnitude /= u64::from(BASE_MINOR);
    }
    while letters.len() < padding {
        letters.push('A');
    }
    if value < 0 {
        out.push('-');
    }
    out.extend(letters.iter().rev());
}

/// Append `value` in base 26 to any formatter, same rules as [`format_b26`].
pub(crate) fn write_b26(f: &mut impl Write, value: i64, padding: usize) -> std::fmt::Result {
    let mut buf = String::new();
    push_b26(&mut buf, value, padding);
    f.write_str(&buf)
}
