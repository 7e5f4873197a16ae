//! Output formatting and digit dumps.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use pib26_core::BigFloat;

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a count with thousand separators.
#[must_use]
pub fn format_count(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// The leading digit, a point, and the next `len` base-26 digits of
/// `value` on one line, without the dump's grouping.
#[must_use]
pub fn compact_digits(value: &BigFloat<'_>, len: usize) -> String {
    let mut out = Vec::new();
    // writing to a Vec cannot fail
    let _ = value.write_nice(&mut out, len);
    let dump = String::from_utf8_lossy(&out);
    let mut lines = dump.lines();
    let mut compact = lines.next().unwrap_or_default().to_owned();
    for line in lines {
        let digits = line.split(" : ").next().unwrap_or_default();
        compact.extend(digits.split_whitespace());
    }
    compact
}

/// Write the paginated dump of `num_digits` digits to `path`.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_dump(path: &Path, value: &BigFloat<'_>, num_digits: usize) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    value.write_nice(&mut out, num_digits)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn third(prec: usize) -> BigFloat<'static> {
        let mut f = BigFloat::new(prec);
        f.assign_small(1);
        f.div_small_assign(3u32).unwrap();
        f
    }

    #[test]
    fn format_duration_units() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert_eq!(format_duration(Duration::from_millis(3_140)), "3.140s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m30.0s");
    }

    #[test]
    fn format_count_thousands() {
        assert_eq!(format_count(1_000_000), "1,000,000");
        assert_eq!(format_count(42), "42");
        assert_eq!(format_count(1234), "1,234");
    }

    #[test]
    fn compact_digits_strip_layout() {
        let f = third(20);
        assert_eq!(compact_digits(&f, 12), "I.RIRIRIRIRIRI");
        let long = compact_digits(&f, 60);
        assert_eq!(long.len(), 62);
        assert!(long[2..].chars().all(|c| c == 'R' || c == 'I'));
    }

    #[test]
    fn dump_goes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("third.txt");
        write_dump(&path, &third(30), 100).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("I.\nRIRIRIRIRI "));
        assert!(text.contains(" : 50\n"));
        assert!(text.contains(" : 100\n"));
    }

    #[test]
    fn dump_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("x.txt");
        assert!(write_dump(&path, &third(2), 10).is_err());
    }
}
