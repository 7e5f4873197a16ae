//! # pib26-memory
//!
//! Digit storage for the PIB26 arithmetic engine.
//!
//! Provides [`Buffer`], a digit region that either owns its allocation or
//! borrows caller storage, and [`DigitArena`], a bump arena that hands out
//! zeroed regions for numbers that share one backing block.
#![warn(missing_docs)]

pub mod arena;
pub mod buffer;

pub use arena::DigitArena;
pub use buffer::{Buffer, Origin};
