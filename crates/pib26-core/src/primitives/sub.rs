use crate::constants::{Digit, BASE};

#[inline]
fn sub_digit(x: Digit, y: Digit, borrow: bool) -> (Digit, bool) {
    let (diff, o1) = x.overflowing_sub(y);
    let (diff, o2) = diff.overflowing_sub(Digit::from(borrow));
    if o1 || o2 {
        (diff.wrapping_add(BASE), true)
    } else {
        (diff, false)
    }
}

/// `r = a - b - borrow` over equal-length regions. Returns the outgoing borrow.
pub fn sub(r: &mut [Digit], a: &[Digit], b: &[Digit], borrow: bool) -> bool {
    debug_assert!(r.len() == a.len() && r.len() == b.len());
    let mut borrow = borrow;
    for ((dst, &x), &y) in r.iter_mut().zip(a).zip(b) {
        (*dst, borrow) = sub_digit(x, y, borrow);
    }
    borrow
}

/// `r -= b + borrow`.
pub fn sub_assign(r: &mut [Digit], b: &[Digit], borrow: bool) -> bool {
    debug_assert_eq!(r.len(), b.len());
    let mut borrow = borrow;
    for (dst, &y) in r.iter_mut().zip(b) {
        (*dst, borrow) = sub_digit(*dst, y, borrow);
    }
    borrow
}

/// `r = a - borrow`.
pub fn propagate_borrow(r: &mut [Digit], a: &[Digit], borrow: bool) -> bool {
    debug_assert_eq!(r.len(), a.len());
    let mut borrow = borrow;
    for (dst, &x) in r.iter_mut().zip(a) {
        (*dst, borrow) = sub_digit(x, 0, borrow);
    }
    borrow
}

/// `r -= borrow`, stopping as soon as the borrow is absorbed.
pub fn propagate_borrow_assign(r: &mut [Digit], borrow: bool) -> bool {
    if !borrow {
        return false;
    }
    for dst in r.iter_mut() {
        if *dst == 0 {
            *dst = BASE - 1;
        } else {
            *dst -= 1;
            return false;
        }
    }
    true
}

/// `r = 0 - a - borrow`.
pub fn neg(r: &mut [Digit], a: &[Digit], borrow: bool) -> bool {
    debug_assert_eq!(r.len(), a.len());
    let mut borrow = borrow;
    for (dst, &x) in r.iter_mut().zip(a) {
        (*dst, borrow) = sub_digit(0, x, borrow);
    }
    borrow
}

/// `r = 0 - r - borrow`.
pub fn neg_assign(r: &mut [Digit], borrow: bool) -> bool {
    let mut borrow = borrow;
    for dst in r.iter_mut() {
        (*dst, borrow) = sub_digit(0, *dst, borrow);
    }
    borrow
}

/// `r -= a` over the length of `r`, mirroring
/// [`propagate_add`](super::propagate_add).
pub fn propagate_sub(r: &mut [Digit], a: &[Digit]) -> bool {
    let n = r.len().min(a.len());
    let (low, high) = r.split_at_mut(n);
    let borrow = sub_assign(low, &a[..n], false);
    propagate_borrow_assign(high, borrow)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP: Digit = BASE - 1;

    #[test]
    fn sub_ripples_borrow() {
        let mut r = [0; 3];
        assert!(!sub(&mut r, &[0, 0, 1], &[1, 0, 0], false));
        assert_eq!(r, [TOP, TOP, 0]);
    }

    #[test]
    fn sub_reports_underflow_as_complement() {
        let mut r = [0; 2];
        assert!(sub(&mut r, &[1, 0], &[2, 0], false));
        assert_eq!(r, [TOP, TOP]);
    }

    #[test]
    fn neg_is_complement() {
        let mut r = [0; 2];
        assert!(neg(&mut r, &[1, 0], false));
        assert_eq!(r, [TOP, TOP]);
        let mut z = [0, 0];
        assert!(!neg_assign(&mut z, false));
        assert_eq!(z, [0, 0]);
    }

    #[test]
    fn borrow_assign_stops_early() {
        let mut r = [0, 3, 0];
        assert!(!propagate_borrow_assign(&mut r, true));
        assert_eq!(r, [TOP, 2, 0]);
    }

    #[test]
    fn propagate_sub_ripples() {
        let mut r = [0, 0, 5];
        assert!(!propagate_sub(&mut r, &[1]));
        assert_eq!(r, [TOP, TOP, 4]);
        let mut r = [0];
        assert!(propagate_sub(&mut r, &[1, 7]));
        assert_eq!(r, [TOP]);
    }
}
