//! # pib26-core
//!
//! Arbitrary-precision arithmetic in radix `26^4`.
//!
//! Numbers are little-endian strings of [`Digit`]s, each holding four base-26
//! output digits. The crate layers three things on top of the stateless
//! [`primitives`]:
//!
//! - [`BigInt`] and [`BigFloat`], signed numbers whose storage is either owned
//!   or borrowed from the caller;
//! - pluggable [`Multiplier`] strategies (schoolbook, Karatsuba, FFT) and
//!   threshold dispatchers that combine them;
//! - precision-doubling Newton iteration for reciprocals and inverse square
//!   roots in [`newton`].
//!
//! Operations never grow a destination: a result that does not fit is
//! truncated to the destination's capacity or precision.
//!
//! # Example
//! ```
//! use pib26_core::{newton, BigFloat, Karatsuba, NoOpTicker};
//!
//! let mut three = BigFloat::new(8);
//! three.assign_small(3);
//! let mut third = BigFloat::new(8);
//! let mut strategy = Karatsuba::new(64);
//! newton::recip(&mut third, &mut three, &mut strategy, &mut NoOpTicker).unwrap();
//! assert_eq!(third.exponent(), -1);
//! ```

pub mod b26;
pub mod bigfloat;
pub mod bigint;
pub mod constants;
pub mod error;
pub mod newton;
pub mod primitives;
pub mod sign;
pub mod strategy;
pub mod ticker;

pub use b26::{b26_digit, format_b26};
pub use bigfloat::BigFloat;
pub use bigint::BigInt;
pub use constants::{exit_codes, Digit, TwoDigit, BASE, BASE_MINOR, DIGS_PER_DIG};
pub use error::ArithError;
pub use sign::{Sign, Small};
pub use strategy::{FftMul, FlexMul2, FlexMul3, Karatsuba, Multiplier, Schoolbook};
pub use ticker::{LoggingTicker, NoOpTicker, ProgressTicker};
