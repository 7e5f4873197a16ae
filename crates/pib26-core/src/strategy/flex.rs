//! Size-dispatching combinators.
//!
//! Each submit goes to one sub-strategy picked by product length
//! `a.len() + b.len()`; queries go to whichever sub-strategy took the last
//! submit.

use tracing::trace;

use crate::constants::Digit;
use crate::error::ArithError;

use super::Multiplier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    First,
    Second,
    Third,
}

/// Two strategies split at one threshold.
#[derive(Debug, Clone)]
pub struct FlexMul2<A, B> {
    small: A,
    large: B,
    threshold: usize,
    last: Option<Slot>,
}

impl<A: Multiplier, B: Multiplier> FlexMul2<A, B> {
    /// Products shorter than `threshold` go to `small`, the rest to `large`.
    pub fn new(small: A, large: B, threshold: usize) -> Self {
        Self {
            small,
            large,
            threshold,
            last: None,
        }
    }

    fn pick(&self, prod_len: usize) -> Slot {
        if prod_len < self.threshold {
            Slot::First
        } else {
            Slot::Second
        }
    }

    fn current(&self) -> Option<&dyn Multiplier> {
        match self.last? {
            Slot::First => Some(&self.small),
            Slot::Second | Slot::Third => Some(&self.large),
        }
    }

    fn submit(
        &mut self,
        prod_len: usize,
        run: impl FnOnce(&mut dyn Multiplier) -> Result<(), ArithError>,
    ) -> Result<(), ArithError> {
        let slot = self.pick(prod_len);
        self.last = None;
        let target: &mut dyn Multiplier = match slot {
            Slot::First => &mut self.small,
            Slot::Second | Slot::Third => &mut self.large,
        };
        trace!(strategy = target.name(), prod_len, "dispatch");
        run(target)?;
        self.last = Some(slot);
        Ok(())
    }
}

impl<A: Multiplier, B: Multiplier> Multiplier for FlexMul2<A, B> {
    fn mul_digits(&mut self, a: &[Digit], b: &[Digit]) -> Result<(), ArithError> {
        self.submit(a.len() + b.len(), |m| m.mul_digits(a, b))
    }

    fn square_digits(&mut self, a: &[Digit]) -> Result<(), ArithError> {
        self.submit(2 * a.len(), |m| m.square_digits(a))
    }

    fn product_len(&self) -> usize {
        self.current().map_or(0, Multiplier::product_len)
    }

    fn product_digits(&self, dst: &mut [Digit], origin: usize) {
        match self.current() {
            Some(m) => m.product_digits(dst, origin),
            None => dst.fill(0),
        }
    }

    fn max_product_len(&self) -> usize {
        self.small.max_product_len().max(self.large.max_product_len())
    }

    fn name(&self) -> &'static str {
        "FlexMul2"
    }
}

/// Three strategies split at two thresholds.
#[derive(Debug, Clone)]
pub struct FlexMul3<A, B, C> {
    small: A,
    medium: B,
    large: C,
    lower: usize,
    upper: usize,
    last: Option<Slot>,
}

impl<A: Multiplier, B: Multiplier, C: Multiplier> FlexMul3<A, B, C> {
    /// Products shorter than `lower` go to `small`, shorter than `upper` to
    /// `medium`, and the rest to `large`.
    pub fn new(small: A, medium: B, large: C, lower: usize, upper: usize) -> Self {
        Self {
            small,
            medium,
            large,
            lower,
            upper,
            last: None,
        }
    }

    fn pick(&self, prod_len: usize) -> Slot {
        if prod_len < self.lower {
            Slot::First
        } else if prod_len < self.upper {
            Slot::Second
        } else {
            Slot::Third
        }
    }

    fn current(&self) -> Option<&dyn Multiplier> {
        match self.last? {
            Slot::First => Some(&self.small),
            Slot::Second => Some(&self.medium),
            Slot::Third => Some(&self.large),
        }
    }

    fn submit(
        &mut self,
        prod_len: usize,
        run: impl FnOnce(&mut dyn Multiplier) -> Result<(), ArithError>,
    ) -> Result<(), ArithError> {
        let slot = self.pick(prod_len);
        self.last = None;
        let target: &mut dyn Multiplier = match slot {
            Slot::First => &mut self.small,
            Slot::Second => &mut self.medium,
            Slot::Third => &mut self.large,
        };
        trace!(strategy = target.name(), prod_len, "dispatch");
        run(target)?;
        self.last = Some(slot);
        Ok(())
    }
}

impl<A: Multiplier, B: Multiplier, C: Multiplier> Multiplier for FlexMul3<A, B, C> {
    fn mul_digits(&mut self, a: &[Digit], b: &[Digit]) -> Result<(), ArithError> {
        self.submit(a.len() + b.len(), |m| m.mul_digits(a, b))
    }

    fn square_digits(&mut self, a: &[Digit]) -> Result<(), ArithError> {
        self.submit(2 * a.len(), |m| m.square_digits(a))
    }

    fn product_len(&self) -> usize {
        self.current().map_or(0, Multiplier::product_len)
    }

    fn product_digits(&self, dst: &mut [Digit], origin: usize) {
        match self.current() {
            Some(m) => m.product_digits(dst, origin),
            None => dst.fill(0),
        }
    }

    fn max_product_len(&self) -> usize {
        self.small
            .max_product_len()
            .max(self.medium.max_product_len())
            .max(self.large.max_product_len())
    }

    fn name(&self) -> &'static str {
        "FlexMul3"
    }
}
