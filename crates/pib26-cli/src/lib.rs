//! # pib26-cli
//!
//! Terminal presentation for PIB26: progress tickers, digit dumps, stage
//! reporting and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ticker;
pub mod ui;

#[cfg(test)]
mod test_support;

pub use presenter::Presenter;
pub use ticker::{BarTicker, DotsTicker, LabelTicker};
