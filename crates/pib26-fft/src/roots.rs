//! Root-of-unity table shared by every transform.

use std::f64::consts::PI;

use tracing::debug;

use crate::complex::Complex;

/// Table of `e^(-2 pi i k / N)` for `k` in `0..N`.
///
/// A transform of length `n` dividing `N` reads its `k`-th root at index
/// `k * (N / n)`.
#[derive(Debug, Clone)]
pub struct RootTable {
    roots: Vec<Complex>,
}

impl RootTable {
    /// Build the table for `len` roots.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(len: usize) -> Self {
        let n = len as f64;
        let roots = (0..len)
            .map(|k| {
                let theta = -2.0 * PI * (k as f64) / n;
                Complex::new(theta.cos(), theta.sin())
            })
            .collect();
        debug!(len, "built root table");
        Self { roots }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Whether a transform of length `n` can draw its roots from this table.
    #[must_use]
    pub fn divides(&self, n: usize) -> bool {
        n != 0 && !self.roots.is_empty() && self.roots.len() % n == 0
    }

    /// Table stride for a transform of length `n`. `n` must divide the table.
    #[inline]
    #[must_use]
    pub fn stride(&self, n: usize) -> usize {
        self.roots.len() / n
    }

    /// Entry `i` of the table.
    #[inline]
    #[must_use]
    pub fn at(&self, i: usize) -> Complex {
        self.roots[i]
    }

    /// Largest power of two dividing the table length.
    #[must_use]
    pub fn max_pow2(&self) -> usize {
        let mut size = 1;
        let mut rest = self.roots.len();
        while rest != 0 && rest % 2 == 0 {
            rest /= 2;
            size *= 2;
        }
        size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_root_is_one() {
        let table = RootTable::new(12);
        assert_eq!(table.at(0), Complex::new(1.0, 0.0));
    }

    #[test]
    fn quarter_turn_is_minus_i() {
        let table = RootTable::new(16);
        let w = table.at(4);
        assert!(w.re.abs() < 1e-15);
        assert!((w.im + 1.0).abs() < 1e-15);
    }

    #[test]
    fn roots_lie_on_unit_circle() {
        let table = RootTable::new(96);
        for i in 0..table.len() {
            let w = table.at(i);
            assert!((w.re * w.re + w.im * w.im - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn divisibility_and_strides() {
        let table = RootTable::new(48);
        assert!(table.divides(3));
        assert!(table.divides(16));
        assert!(!table.divides(32));
        assert!(!table.divides(0));
        assert_eq!(table.stride(12), 4);
        assert_eq!(table.max_pow2(), 16);
    }
}
