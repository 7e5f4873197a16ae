//! Aligned addition and subtraction.
//!
//! Operands are never shifted to line up. Each is cropped to what fits below
//! its top digit's position in the destination window and read straight
//! from its own storage. Three layouts are possible for the upper operand
//! `U` (larger exponent) and the lower operand `L`:
//!
//! ```text
//! nested       partial        disjoint
//! RRRRRRRRR    RRRRRRRRR      RRRRRRRRR
//! UUUUUUU      UUUU           UUU
//!   LLL           LLLL            LL
//! ```

use std::ops::Range;

use crate::constants::Digit;
use crate::primitives::{
    add, add_assign, neg, neg_assign, nineize, propagate_borrow, propagate_borrow_assign,
    propagate_carry, propagate_carry_assign, rshift, sub, sub_assign, zeroize,
};
use crate::sign::Sign;

use super::{to_isize, top, BigFloat};

/// One stretch of the window and the operand digits that cover it.
type Segment<'x> = (Range<usize>, Option<&'x [Digit]>, Option<&'x [Digit]>);

/// Placement of the cropped operands inside a window of `total` digits.
struct Layout<'x> {
    upper: &'x [Digit],
    lower: &'x [Digit],
    total: usize,
    /// First index below the lower operand's top digit.
    lower_end: usize,
}

impl<'x> Layout<'x> {
    fn new(upper: &'x [Digit], lower: &'x [Digit], total: usize, ediff: usize) -> Self {
        let lower_end = total - ediff;
        Self {
            upper: top(upper, total),
            lower: top(lower, lower_end),
            total,
            lower_end,
        }
    }

    fn upper_start(&self) -> usize {
        self.total - self.upper.len()
    }

    fn lower_start(&self) -> usize {
        self.lower_end - self.lower.len()
    }

    /// Window digits below both operands.
    fn bottom(&self) -> usize {
        self.upper_start().min(self.lower_start())
    }

    /// The window from [`Layout::bottom`] up, as three segments.
    fn segments(&self) -> [Segment<'x>; 3] {
        let (u, l) = (self.upper, self.lower);
        let (u0, l0, l1) = (self.upper_start(), self.lower_start(), self.lower_end);
        if l0 >= u0 {
            [
                (u0..l0, Some(&u[..l0 - u0]), None),
                (l0..l1, Some(&u[l0 - u0..l1 - u0]), Some(l)),
                (l1..self.total, Some(&u[l1 - u0..]), None),
            ]
        } else if u0 < l1 {
            [
                (l0..u0, None, Some(&l[..u0 - l0])),
                (u0..l1, Some(&u[..l1 - u0]), Some(&l[u0 - l0..])),
                (l1..self.total, Some(&u[l1 - u0..]), None),
            ]
        } else {
            [
                (l0..l1, None, Some(l)),
                (l1..u0, None, None),
                (u0..self.total, Some(u), None),
            ]
        }
    }
}

/// `r = x + y + carry` where either side may be absent.
fn add_segment(r: &mut [Digit], x: Option<&[Digit]>, y: Option<&[Digit]>, carry: bool) -> bool {
    match (x, y) {
        (Some(x), Some(y)) => add(r, x, y, carry),
        (Some(only), None) | (None, Some(only)) => propagate_carry(r, only, carry),
        (None, None) => {
            zeroize(r);
            propagate_carry_assign(r, carry)
        }
    }
}

/// `r = x - y - borrow` where either side may be absent.
fn sub_segment(r: &mut [Digit], x: Option<&[Digit]>, y: Option<&[Digit]>, borrow: bool) -> bool {
    match (x, y) {
        (Some(x), Some(y)) => sub(r, x, y, borrow),
        (Some(x), None) => propagate_borrow(r, x, borrow),
        (None, Some(y)) => neg(r, y, borrow),
        (None, None) => {
            if borrow {
                nineize(r);
            } else {
                zeroize(r);
            }
            borrow
        }
    }
}

impl BigFloat<'_> {
    /// A carry out of the top shifts the window down one digit.
    fn absorb_top_carry(&mut self, carry: bool) {
        if carry {
            let window = self.window_mut();
            rshift(window, 1);
            if let Some(msd) = window.last_mut() {
                *msd = 1;
            }
            self.exp += 1;
        }
    }

    /// A borrow out of the top means the difference is negative.
    fn finish_difference(&mut self, borrow: bool) {
        self.sign = if borrow {
            neg_assign(self.window_mut(), false);
            Sign::Negative
        } else {
            Sign::Positive
        };
        self.renormalize();
    }

    /// `|a| + |b|`.
    fn uadd(&mut self, a: &BigFloat<'_>, b: &BigFloat<'_>) {
        let (a, b) = if a.exp >= b.exp { (a, b) } else { (b, a) };
        let total = self.total_len();
        let ediff = a.exp.abs_diff(b.exp);
        if ediff >= total {
            self.uassign(a.digits(), a.exp);
            self.sign = Sign::Positive;
            return;
        }
        self.exp = a.exp;

        let layout = Layout::new(a.digits(), b.digits(), total, ediff);
        let window = self.window_mut();
        window[..layout.bottom()].fill(0);
        let mut carry = false;
        for (range, x, y) in layout.segments() {
            carry = add_segment(&mut window[range], x, y, carry);
        }
        self.absorb_top_carry(carry);
        self.sign = Sign::Positive;
    }

    /// `|self| + |b|`.
    fn uadd_assign(&mut self, b: &BigFloat<'_>) {
        let total = self.total_len();
        let ediff = self.exp.abs_diff(b.exp);
        if ediff >= total {
            if b.exp > self.exp {
                self.uassign(b.digits(), b.exp);
            }
            self.sign = Sign::Positive;
            return;
        }

        let carry = if self.exp >= b.exp {
            let end = total - ediff;
            let y = top(b.digits(), end);
            let window = self.window_mut();
            let carry = add_assign(&mut window[end - y.len()..end], y, false);
            propagate_carry_assign(&mut window[end..], carry)
        } else {
            self.exp = b.exp;
            let y = top(b.digits(), total);
            let window = self.window_mut();
            rshift(window, ediff);
            add_assign(&mut window[total - y.len()..], y, false)
        };
        self.absorb_top_carry(carry);
        self.sign = Sign::Positive;
    }

    /// `|a| - |b|`, with the sign of the difference.
    fn usub(&mut self, a: &BigFloat<'_>, b: &BigFloat<'_>) {
        let total = self.total_len();
        let a_upper = a.exp >= b.exp;
        let (upper, lower) = if a_upper { (a, b) } else { (b, a) };
        let ediff = a.exp.abs_diff(b.exp);
        if ediff >= total {
            self.uassign(upper.digits(), upper.exp);
            self.sign = if a_upper { Sign::Positive } else { Sign::Negative };
            return;
        }
        self.exp = upper.exp;

        let layout = Layout::new(upper.digits(), lower.digits(), total, ediff);
        let window = self.window_mut();
        window[..layout.bottom()].fill(0);
        let mut borrow = false;
        for (range, u, l) in layout.segments() {
            let (x, y) = if a_upper { (u, l) } else { (l, u) };
            borrow = sub_segment(&mut window[range], x, y, borrow);
        }
        self.finish_difference(borrow);
    }

    /// `|self| - |b|`, with the sign of the difference.
    fn usub_assign(&mut self, b: &BigFloat<'_>) {
        let total = self.total_len();
        let ediff = self.exp.abs_diff(b.exp);
        if ediff >= total {
            if b.exp > self.exp {
                self.uassign(b.digits(), b.exp);
                self.sign = Sign::Negative;
            } else {
                self.sign = Sign::Positive;
            }
            return;
        }

        let borrow = if self.exp >= b.exp {
            let end = total - ediff;
            let y = top(b.digits(), end);
            let window = self.window_mut();
            let borrow = sub_assign(&mut window[end - y.len()..end], y, false);
            propagate_borrow_assign(&mut window[end..], borrow)
        } else {
            self.exp = b.exp;
            let y = top(b.digits(), total);
            let window = self.window_mut();
            rshift(window, ediff);
            sub_assign(&mut window[total - y.len()..], y, false)
        };
        self.finish_difference(borrow);
    }

    fn add_signed(&mut self, a: &BigFloat<'_>, b: &BigFloat<'_>, b_sign: Sign) {
        if b.is_zero() {
            self.assign(a);
        } else if a.is_zero() {
            self.assign(b);
            self.sign = b_sign;
        } else if a.sign == b_sign {
            self.uadd(a, b);
            self.sign = a.sign;
        } else if a.sign == Sign::Positive {
            self.usub(a, b);
        } else {
            self.usub(b, a);
        }
    }

    fn add_assign_signed(&mut self, b: &BigFloat<'_>, b_sign: Sign) {
        if b.is_zero() {
            return;
        }
        if self.is_zero() {
            self.assign(b);
            self.sign = b_sign;
            return;
        }
        let was = self.sign;
        if was == b_sign {
            self.uadd_assign(b);
            self.sign = was;
        } else {
            self.usub_assign(b);
            if was == Sign::Negative {
                self.neg();
            }
        }
    }

    /// `self = a + b`.
    pub fn add(&mut self, a: &BigFloat<'_>, b: &BigFloat<'_>) {
        self.add_signed(a, b, b.sign);
    }

    /// `self += b`.
    pub fn add_assign(&mut self, b: &BigFloat<'_>) {
        self.add_assign_signed(b, b.sign);
    }

    /// `self = a - b`.
    pub fn sub(&mut self, a: &BigFloat<'_>, b: &BigFloat<'_>) {
        self.add_signed(a, b, -b.sign);
    }

    /// `self -= b`.
    pub fn sub_assign(&mut self, b: &BigFloat<'_>) {
        self.add_assign_signed(b, -b.sign);
    }
}
