//! Stateless operations on little-endian digit regions.
//!
//! Every digit stays in `[0, BASE)`. Functions taking several regions expect
//! the lengths documented on each; mismatches are caught by debug assertions.
//! There is no failure mode at this layer: carries and borrows that fall off
//! the top are returned to the caller.

mod add;
mod compare;
mod shift;
mod small;
mod sub;

pub use add::{add, add_assign, propagate_add, propagate_carry, propagate_carry_assign, uneven_add};
pub use compare::{compare, count_signif_digits, small_signif_digits, test_zero};
pub use shift::{copy, lshift, nineize, rshift, zeroize};
pub use small::{
    add_small, assign_small, div_by_small, div_by_small_assign, fp_div_by_small,
    fp_div_by_small_assign, mod_by_small, mul_add, mul_by_small, mul_by_small_assign,
};
pub use sub::{
    neg, neg_assign, propagate_borrow, propagate_borrow_assign, propagate_sub, sub, sub_assign,
};
