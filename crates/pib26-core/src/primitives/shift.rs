use crate::constants::{Digit, BASE};

/// Move every digit `shift` places up, filling the bottom with zeros.
pub fn lshift(r: &mut [Digit], shift: usize) {
    let len = r.len();
    if shift >= len {
        r.fill(0);
        return;
    }
    r.copy_within(..len - shift, shift);
    r[..shift].fill(0);
}

/// Move every digit `shift` places down, filling the top with zeros.
pub fn rshift(r: &mut [Digit], shift: usize) {
    let len = r.len();
    if shift >= len {
        r.fill(0);
        return;
    }
    r.copy_within(shift.., 0);
    r[len - shift..].fill(0);
}

pub fn zeroize(r: &mut [Digit]) {
    r.fill(0);
}

/// Fill with `BASE - 1`.
pub fn nineize(r: &mut [Digit]) {
    r.fill(BASE - 1);
}

/// Copy the low `min(r.len(), a.len())` digits of `a`. Returns the count.
pub fn copy(r: &mut [Digit], a: &[Digit]) -> usize {
    let n = r.len().min(a.len());
    r[..n].copy_from_slice(&a[..n]);
    n
}
