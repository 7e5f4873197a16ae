//! Precision-doubling Newton iteration.
//!
//! Each routine seeds the result from a native-float estimate of the
//! operand's leading two digits and refines it [`NEWTON_SEED_ITERATIONS`] times at a
//! precision of two digits. It then doubles the working precision until it
//! reaches the result's own, running one refinement per doubling. The
//! reduced-precision operand and scratch values are truncated aliases, so
//! no digits are copied between steps.
//!
//! The result's precision is the target. The operand may carry more or
//! fewer digits; a longer operand is read only as far as the target.

use crate::bigfloat::BigFloat;
use crate::constants::{Digit, BASE, DIGS_PER_DIG, NEWTON_SEED_ITERATIONS};
use crate::error::ArithError;
use crate::sign::Sign;
use crate::strategy::Multiplier;
use crate::ticker::ProgressTicker;

/// Working precision of the seed refinements.
const START_PREC: usize = 2;

/// A native-float seed as a digit, clamped to `[1, BASE]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed_digit(seed: f64) -> Digit {
    seed.floor().clamp(1.0, f64::from(BASE)) as Digit
}

/// The top two digits of a nonzero float as a value in `[1, BASE)`.
///
/// A single digit is too coarse: a leading 1 followed by a large digit puts
/// the reciprocal seed off by nearly a factor of two, where the iteration
/// stalls.
fn leading_value(a: &BigFloat<'_>) -> f64 {
    let digits = a.digits();
    let next = digits.len().checked_sub(2).map_or(0, |i| digits[i]);
    f64::from(a.top_digit()) + f64::from(next) / f64::from(BASE)
}

/// `x = x (3 - t) / 2`, where `t` holds `|a| x^2`.
fn invsqrt_step(
    x: &mut BigFloat<'_>,
    t: &mut BigFloat<'_>,
    three: &BigFloat<'_>,
    strategy: &mut dyn Multiplier,
) -> Result<(), ArithError> {
    t.sub_assign(three);
    t.neg();
    x.mul_assign(t, strategy)?;
    x.div_small_assign(2u32)?;
    Ok(())
}

/// `r = 1 / a` to the precision of `r`.
///
/// Uses `x <- 2x - a x^2`, with the square taken at the previous precision.
/// The result has the sign of `a`.
pub fn recip(
    r: &mut BigFloat<'_>,
    a: &mut BigFloat<'_>,
    strategy: &mut dyn Multiplier,
    ticker: &mut dyn ProgressTicker,
) -> Result<(), ArithError> {
    if a.is_zero() {
        return Err(ArithError::ZeroOperand);
    }
    let target = r.precision();
    r.set_zero();
    let mut scratch = BigFloat::new(target);
    let mut prec = target.min(START_PREC);
    r.resize(prec)?;

    let seed = f64::from(BASE) / leading_value(a);
    r.set_leading(seed_digit(seed), -(a.exponent() + 1), a.sign());

    let mut two = BigFloat::new(START_PREC);
    two.assign_small(2);

    ticker.set_max(target * DIGS_PER_DIG);
    ticker.print();

    {
        let a_short = a.alias_truncate(prec);
        let mut t = scratch.alias_truncate(prec);
        for _ in 0..NEWTON_SEED_ITERATIONS {
            t.mul(&a_short, r, strategy)?;
            t.sub_assign(&two);
            t.neg();
            r.mul_assign(&t, strategy)?;
        }
    }

    loop {
        prec = (2 * prec).min(target);
        let a_short = a.alias_truncate(prec);
        let mut t = scratch.alias_truncate(prec);
        ticker.set_cur(prec * DIGS_PER_DIG);
        ticker.print();

        t.square(r, strategy)?;
        r.resize(prec)?;
        t.mul_assign(&a_short, strategy)?;
        r.mul_small_assign(2u32);
        r.sub_assign(&t);
        if prec >= target {
            break;
        }
    }

    ticker.finish();
    r.resize(target)
}

/// `r = 1 / sqrt(|a|)` to the precision of `r`.
///
/// Uses `x <- x (3 - a x^2) / 2`. The result is positive.
pub fn invsqrt(
    r: &mut BigFloat<'_>,
    a: &mut BigFloat<'_>,
    strategy: &mut dyn Multiplier,
    ticker: &mut dyn ProgressTicker,
) -> Result<(), ArithError> {
    if a.is_zero() {
        return Err(ArithError::ZeroOperand);
    }
    let target = r.precision();
    r.set_zero();
    let mut scratch = BigFloat::new(target);
    let mut prec = target.min(START_PREC);
    r.resize(prec)?;

    // 1/sqrt(f B^e) = B^(-e/2) / sqrt(f); an odd exponent moves one factor
    // of sqrt(B) into the digit.
    let exp = a.exponent();
    let seed = f64::from(BASE) / leading_value(a).sqrt();
    let (seed, seed_exp) = if exp.rem_euclid(2) == 0 {
        (seed, -(exp / 2 + 1))
    } else {
        (seed / f64::from(BASE).sqrt(), -((exp - 1) / 2 + 1))
    };
    r.set_leading(seed_digit(seed), seed_exp, Sign::Positive);

    let mut three = BigFloat::new(START_PREC);
    three.assign_small(3);

    ticker.set_max(target * DIGS_PER_DIG);
    ticker.print();

    {
        let a_short = a.alias_truncate(prec);
        let mut t = scratch.alias_truncate(prec);
        for _ in 0..NEWTON_SEED_ITERATIONS {
            t.square(r, strategy)?;
            t.mul_assign(&a_short, strategy)?;
            t.abs();
            invsqrt_step(r, &mut t, &three, strategy)?;
        }
    }

    loop {
        prec = (2 * prec).min(target);
        let a_short = a.alias_truncate(prec);
        let mut t = scratch.alias_truncate(prec);
        ticker.set_cur(prec * DIGS_PER_DIG);
        ticker.print();

        t.square(r, strategy)?;
        r.resize(prec)?;
        t.mul_assign(&a_short, strategy)?;
        t.abs();
        invsqrt_step(r, &mut t, &three, strategy)?;
        if prec >= target {
            break;
        }
    }

    ticker.finish();
    r.resize(target)
}

/// `r = 1 / sqrt(a)` for a machine word, to the precision of `r`.
///
/// Same iteration as [`invsqrt`] with the multiply by `a` done as a small
/// multiply.
pub fn invsqrt_small(
    r: &mut BigFloat<'_>,
    a: u32,
    strategy: &mut dyn Multiplier,
    ticker: &mut dyn ProgressTicker,
) -> Result<(), ArithError> {
    if a == 0 {
        return Err(ArithError::ZeroOperand);
    }
    let target = r.precision();
    r.set_zero();
    let mut scratch = BigFloat::new(target);
    let mut prec = target.min(START_PREC);
    r.resize(prec)?;

    let mut seed = (1.0 / f64::from(a)).sqrt();
    let mut seed_exp = 0;
    while seed < 1.0 {
        seed *= f64::from(BASE);
        seed_exp -= 1;
    }
    r.set_leading(seed_digit(seed), seed_exp, Sign::Positive);

    let mut three = BigFloat::new(START_PREC);
    three.assign_small(3);

    ticker.set_max(target * DIGS_PER_DIG);
    ticker.print();

    {
        let mut t = scratch.alias_truncate(prec);
        for _ in 0..NEWTON_SEED_ITERATIONS {
            t.square(r, strategy)?;
            t.mul_small_assign(a);
            invsqrt_step(r, &mut t, &three, strategy)?;
        }
    }

    loop {
        prec = (2 * prec).min(target);
        let mut t = scratch.alias_truncate(prec);
        ticker.set_cur(prec * DIGS_PER_DIG);
        ticker.print();

        t.square(r, strategy)?;
        r.resize(prec)?;
        t.mul_small_assign(a);
        invsqrt_step(r, &mut t, &three, strategy)?;
        if prec >= target {
            break;
        }
    }

    ticker.finish();
    r.resize(target)
}
