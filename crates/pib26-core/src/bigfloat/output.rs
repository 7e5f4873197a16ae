use std::fmt;
use std::io;

use crate::b26::{b26_digit, write_b26};
use crate::constants::{Digit, BASE, BASE_MINOR, DIGS_PER_DIG};

use super::BigFloat;

/// Digits per group in [`BigFloat::write_nice`].
const GROUP: usize = 10;
/// Digits per line in [`BigFloat::write_nice`].
const LINE: usize = 50;
/// Digits per block in [`BigFloat::write_nice`].
const BLOCK: usize = 1000;

impl BigFloat<'_> {
    /// The base-26 digit at position `which`, counted from the most
    /// significant sub-digit of the top digit. Positions past the window
    /// read as zero.
    #[must_use]
    pub fn small_digit(&self, which: usize) -> u32 {
        let window = self.digits();
        let from_top = which / DIGS_PER_DIG;
        let Some(index) = window.len().checked_sub(1 + from_top) else {
            return 0;
        };
        let shift = DIGS_PER_DIG - 1 - which % DIGS_PER_DIG;
        let mut digit = window[index];
        for _ in 0..shift {
            digit /= BASE_MINOR;
        }
        digit % BASE_MINOR
    }

    /// Sub-digits of zero above the first nonzero one in the top digit.
    fn leading_small_zeros(&self) -> usize {
        let mut first: Digit = self.top_digit();
        let mut count = 0;
        if first == 0 {
            return 0;
        }
        while first < BASE / BASE_MINOR {
            first *= BASE_MINOR;
            count += 1;
        }
        count
    }

    /// Write `num_digits` base-26 digits after the leading one.
    ///
    /// The leading digit comes first followed by `.` and a newline. Digits
    /// are grouped by ten, each line of fifty ends with ` : <count>`, and a
    /// blank line separates blocks of a thousand.
    pub fn write_nice<W: io::Write>(&self, out: &mut W, num_digits: usize) -> io::Result<()> {
        let start = self.leading_small_zeros();
        writeln!(out, "{}.", b26_digit(self.small_digit(start)))?;
        for i in 1..=num_digits {
            write!(out, "{}", b26_digit(self.small_digit(start + i)))?;
            if i % GROUP == 0 {
                write!(out, " ")?;
            }
            if i % LINE == 0 {
                writeln!(out, " : {i}")?;
            }
            if i % BLOCK == 0 {
                writeln!(out)?;
            }
        }
        writeln!(out)
    }
}

impl fmt::Display for BigFloat<'_> {
    /// `+D.DDDD... x BASE^e` with every digit in base 26.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((&top, rest)) = self.digits().split_last() else {
            return Ok(());
        };
        write!(f, "{}", self.sign.symbol())?;
        write_b26(f, i64::from(top), 1)?;
        f.write_str(".")?;
        for &digit in rest.iter().rev() {
            write_b26(f, i64::from(digit), DIGS_PER_DIG)?;
        }
        write!(f, " x BASE^{}", self.exp)
    }
}
