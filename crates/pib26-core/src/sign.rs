//! Signs and signed machine-word operands.

use std::ops::{Mul, Neg};

/// Sign of a number. Zero is always [`Sign::Positive`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Sign {
    #[default]
    Positive,
    Negative,
}

impl Sign {
    #[must_use]
    pub fn is_negative(self) -> bool {
        self == Self::Negative
    }

    /// `'+'` or `'-'`.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self == rhs {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// A signed machine-word operand for the small-value operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Small {
    pub sign: Sign,
    pub magnitude: u32,
}

impl Small {
    #[must_use]
    pub const fn new(sign: Sign, magnitude: u32) -> Self {
        Self { sign, magnitude }
    }
}

impl From<u32> for Small {
    fn from(magnitude: u32) -> Self {
        Self::new(Sign::Positive, magnitude)
    }
}

impl From<i32> for Small {
    fn from(value: i32) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self::new(sign, value.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_algebra() {
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Negative * Sign::Negative, Sign::Positive);
        assert_eq!(Sign::Positive * Sign::Negative, Sign::Negative);
        assert_eq!(Sign::default(), Sign::Positive);
    }

    #[test]
    fn small_from_signed() {
        assert_eq!(Small::from(-7), Small::new(Sign::Negative, 7));
        assert_eq!(Small::from(0), Small::new(Sign::Positive, 0));
        assert_eq!(Small::from(i32::MIN).magnitude, 1 << 31);
        assert_eq!(Small::from(9u32).sign, Sign::Positive);
    }
}
