//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

use pib26_cli::output::write_dump;
use pib26_cli::presenter::{Presenter, RunSummary};
use pib26_cli::{BarTicker, DotsTicker, LabelTicker};
use pib26_core::constants::defaults;
use pib26_core::{
    newton, ArithError, BigFloat, FftMul, FlexMul3, Karatsuba, LoggingTicker, Multiplier,
    NoOpTicker, ProgressTicker, Schoolbook,
};

use crate::config::{AppConfig, Operation, StrategyKind, TickerKind};
use crate::version::version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        pib26_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    config.validate()?;
    run_cli(config)
}

/// Longest product a run at `prec` submits: two full float windows.
fn max_product(prec: usize) -> usize {
    2 * BigFloat::buffer_len(prec)
}

/// Build the multiplication stack for a run at `prec` macro-digits.
pub fn build_strategy(config: &AppConfig, prec: usize) -> Result<Box<dyn Multiplier>, ArithError> {
    let needed = max_product(prec);
    let strategy: Box<dyn Multiplier> = match config.strategy {
        StrategyKind::Auto => {
            let fft_capacity = defaults::FFT_MIN_PRODUCT.max(needed) + defaults::FFT_HEADROOM;
            Box::new(FlexMul3::new(
                Schoolbook::new(defaults::CLASSICAL_MAX_PRODUCT),
                Karatsuba::new(defaults::KARATSUBA_MAX_PRODUCT),
                FftMul::new(fft_capacity)?,
                config.small_threshold,
                config.fft_threshold,
            ))
        }
        StrategyKind::Schoolbook => Box::new(Schoolbook::new(needed)),
        StrategyKind::Karatsuba => Box::new(Karatsuba::new(needed)),
        StrategyKind::Fft => Box::new(FftMul::new(needed)?),
    };
    Ok(strategy)
}

fn build_ticker(config: &AppConfig, label: &str) -> Box<dyn ProgressTicker> {
    if config.quiet {
        return Box::new(NoOpTicker);
    }
    match config.ticker {
        TickerKind::Dots => Box::new(DotsTicker::new(label)),
        TickerKind::Label => Box::new(LabelTicker::new(label)),
        TickerKind::Bar => Box::new(BarTicker::new(label)),
        TickerKind::Log => Box::new(LoggingTicker::new(label)),
        TickerKind::None => Box::new(NoOpTicker),
    }
}

/// Run `op` on `value` into `r`, to the precision of `r`.
pub fn compute(
    op: Operation,
    value: u32,
    r: &mut BigFloat<'_>,
    strategy: &mut dyn Multiplier,
    ticker: &mut dyn ProgressTicker,
) -> Result<(), ArithError> {
    match op {
        Operation::Invsqrt => newton::invsqrt_small(r, value, strategy, ticker),
        Operation::Recip => {
            let mut a = BigFloat::new(r.precision());
            a.assign_small(value);
            newton::recip(r, &mut a, strategy, ticker)
        }
        Operation::Sqrt => {
            newton::invsqrt_small(r, value, strategy, ticker)?;
            r.mul_small_assign(value);
            Ok(())
        }
    }
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let digits = config.num_digits();
    let prec = config.precision();
    let op = config.op;
    let mut presenter = Presenter::new(config.verbose, config.quiet);
    presenter.banner(version())?;

    let start = Instant::now();
    info!(op = op.name(), value = config.value, digits, prec, "starting computation");

    presenter.stage("Allocating memory")?;
    let mut strategy = build_strategy(config, prec).context("building multiplication strategy")?;
    let mut result = BigFloat::new(prec);
    presenter.done()?;

    let label = format!("{}({})", op.name(), config.value);
    let mut ticker = build_ticker(config, &label);
    compute(op, config.value, &mut result, strategy.as_mut(), ticker.as_mut())
        .with_context(|| format!("computing {label}"))?;
    let duration = start.elapsed();
    info!(op = op.name(), elapsed_ms = duration.as_millis(), "computation finished");

    presenter.result(&RunSummary {
        operation: op.name(),
        operand: config.value,
        strategy: strategy.name(),
        digits,
        duration,
        value: &result,
    })?;

    if let Some(path) = &config.output {
        presenter.stage("Writing result")?;
        write_dump(path, &result, digits)
            .with_context(|| format!("writing {}", path.display()))?;
        presenter.done()?;
    }
    Ok(())
}
