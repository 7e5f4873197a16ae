//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pib26_core::constants::{defaults, DIGS_PER_DIG};

use crate::errors::ConfigError;

/// Smallest digit count accepted on the command line.
pub const MIN_DIGITS: u64 = 100;
/// Largest digit count accepted on the command line.
pub const MAX_DIGITS: u64 = 4_000_000;

/// What to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// `1 / sqrt(x)`
    Invsqrt,
    /// `1 / x`
    Recip,
    /// `sqrt(x)`, as `x / sqrt(x)`
    Sqrt,
}

impl Operation {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Invsqrt => "invsqrt",
            Self::Recip => "recip",
            Self::Sqrt => "sqrt",
        }
    }
}

/// Multiplication strategy stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Schoolbook, Karatsuba and FFT dispatched by product length.
    Auto,
    Schoolbook,
    Karatsuba,
    Fft,
}

/// Progress display during Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TickerKind {
    /// `label : [....    ]`
    Dots,
    /// `label : cur / max`
    Label,
    /// A progress bar.
    Bar,
    /// Tracing events only.
    Log,
    None,
}

/// PIB26: base-26 reciprocals and inverse square roots.
#[derive(Parser, Debug)]
#[command(name = "pib26", version, about)]
pub struct AppConfig {
    /// Base-26 digits to compute.
    #[arg(
        short,
        long,
        default_value_t = 1000,
        env = "PIB26_DIGITS",
        value_parser = clap::value_parser!(u64).range(MIN_DIGITS..=MAX_DIGITS)
    )]
    pub digits: u64,

    /// Operation to run on the operand.
    #[arg(long, value_enum, default_value_t = Operation::Invsqrt, env = "PIB26_OP")]
    pub op: Operation,

    /// Positive operand.
    #[arg(
        short = 'x',
        long,
        default_value_t = 2,
        env = "PIB26_VALUE",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub value: u32,

    /// Multiplication strategy.
    #[arg(long, value_enum, default_value_t = StrategyKind::Auto, env = "PIB26_STRATEGY")]
    pub strategy: StrategyKind,

    /// Product length from which Karatsuba replaces schoolbook.
    #[arg(long, default_value_t = defaults::SMALL_THRESHOLD, env = "PIB26_SMALL_THRESHOLD")]
    pub small_threshold: usize,

    /// Product length from which FFT replaces Karatsuba.
    #[arg(long, default_value_t = defaults::FFT_THRESHOLD, env = "PIB26_FFT_THRESHOLD")]
    pub fft_threshold: usize,

    /// Progress display.
    #[arg(long, value_enum, default_value_t = TickerKind::Dots, env = "PIB26_TICKER")]
    pub ticker: TickerKind,

    /// Write the paginated digit dump to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Quiet mode (only output the digits).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Digits requested, as a length.
    #[must_use]
    pub fn num_digits(&self) -> usize {
        usize::try_from(self.digits).unwrap_or(usize::MAX)
    }

    /// Working precision in macro-digits.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.num_digits() / DIGS_PER_DIG + 2
    }

    /// Check the settings clap cannot check on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.strategy != StrategyKind::Auto {
            return Ok(());
        }
        if self.small_threshold >= self.fft_threshold {
            return Err(ConfigError::ThresholdOrder {
                small: self.small_threshold,
                fft: self.fft_threshold,
            });
        }
        if self.small_threshold > defaults::CLASSICAL_MAX_PRODUCT {
            return Err(ConfigError::ThresholdAboveCapacity {
                name: "small",
                threshold: self.small_threshold,
                capacity: defaults::CLASSICAL_MAX_PRODUCT,
            });
        }
        if self.fft_threshold > defaults::KARATSUBA_MAX_PRODUCT {
            return Err(ConfigError::ThresholdAboveCapacity {
                name: "fft",
                threshold: self.fft_threshold,
                capacity: defaults::KARATSUBA_MAX_PRODUCT,
            });
        }
        Ok(())
    }
}
