use crate::constants::{Digit, BASE};

#[inline]
fn add_digit(x: Digit, y: Digit, carry: bool) -> (Digit, bool) {
    let sum = x + y + Digit::from(carry);
    if sum >= BASE {
        (sum - BASE, true)
    } else {
        (sum, false)
    }
}

/// `r = a + b + carry` over equal-length regions. Returns the outgoing carry.
pub fn add(r: &mut [Digit], a: &[Digit], b: &[Digit], carry: bool) -> bool {
    debug_assert!(r.len() == a.len() && r.len() == b.len());
    let mut carry = carry;
    for ((dst, &x), &y) in r.iter_mut().zip(a).zip(b) {
        (*dst, carry) = add_digit(x, y, carry);
    }
    carry
}

/// `r += b + carry` over equal-length regions.
pub fn add_assign(r: &mut [Digit], b: &[Digit], carry: bool) -> bool {
    debug_assert_eq!(r.len(), b.len());
    let mut carry = carry;
    for (dst, &y) in r.iter_mut().zip(b) {
        (*dst, carry) = add_digit(*dst, y, carry);
    }
    carry
}

/// `r = a + carry`.
pub fn propagate_carry(r: &mut [Digit], a: &[Digit], carry: bool) -> bool {
    debug_assert_eq!(r.len(), a.len());
    let mut carry = carry;
    for (dst, &x) in r.iter_mut().zip(a) {
        (*dst, carry) = add_digit(x, 0, carry);
    }
    carry
}

/// `r += carry`, stopping as soon as the carry is absorbed.
pub fn propagate_carry_assign(r: &mut [Digit], carry: bool) -> bool {
    if !carry {
        return false;
    }
    for dst in r.iter_mut() {
        if *dst == BASE - 1 {
            *dst = 0;
        } else {
            *dst += 1;
            return false;
        }
    }
    true
}

/// `r = a + b` where `r` is as long as the longer operand.
pub fn uneven_add(r: &mut [Digit], a: &[Digit], b: &[Digit]) -> bool {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    debug_assert_eq!(r.len(), long.len());
    let (low, high) = r.split_at_mut(short.len());
    let carry = add(low, &long[..short.len()], short, false);
    propagate_carry(high, &long[short.len()..], carry)
}

/// `r += a` over the length of `r`.
///
/// `a` is truncated if longer than `r`; if shorter, its carry ripples on
/// through the rest of `r`.
pub fn propagate_add(r: &mut [Digit], a: &[Digit]) -> bool {
    let n = r.len().min(a.len());
    let (low, high) = r.split_at_mut(n);
    let carry = add_assign(low, &a[..n], false);
    propagate_carry_assign(high, carry)
}
