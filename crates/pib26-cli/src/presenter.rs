//! Stage and result reporting for the driver.

use std::io::{self, Write};
use std::time::Duration;

use pib26_core::BigFloat;

use crate::output::{compact_digits, format_count, format_duration};

/// Digits previewed in a non-verbose summary.
const PREVIEW: usize = 50;

/// What a finished run hands to [`Presenter::result`].
pub struct RunSummary<'r, 'v> {
    pub operation: &'r str,
    pub operand: u32,
    pub strategy: &'r str,
    pub digits: usize,
    pub duration: Duration,
    pub value: &'r BigFloat<'v>,
}

/// Writes driver progress and results.
pub struct Presenter<W: Write = io::Stdout> {
    verbose: bool,
    quiet: bool,
    out: W,
}

impl Presenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self::with_writer(verbose, quiet, io::stdout())
    }
}

impl<W: Write> Presenter<W> {
    pub fn with_writer(verbose: bool, quiet: bool, out: W) -> Self {
        Self {
            verbose,
            quiet,
            out,
        }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    pub fn banner(&mut self, version: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "PIB26 version {version}")?;
        writeln!(self.out)
    }

    /// A stage line such as `Allocating memory...`.
    pub fn stage(&mut self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{text}...")?;
        self.out.flush()
    }

    /// Closes the current stage.
    pub fn done(&mut self) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "Done.")?;
        writeln!(self.out)
    }

    pub fn result(&mut self, summary: &RunSummary<'_, '_>) -> io::Result<()> {
        if self.quiet {
            let digits = compact_digits(summary.value, summary.digits);
            return writeln!(self.out, "{digits}");
        }
        writeln!(
            self.out,
            "Total computation time: {}.",
            format_duration(summary.duration)
        )?;
        writeln!(
            self.out,
            "{}({}) to {} base-26 digits",
            summary.operation,
            summary.operand,
            format_count(summary.digits)
        )?;
        if self.verbose {
            writeln!(self.out, "Strategy: {}", summary.strategy)?;
            writeln!(self.out, "Precision: {} digits", summary.value.precision())?;
            writeln!(self.out, "Value: {}", summary.value)?;
        }
        let preview = compact_digits(summary.value, summary.digits.min(PREVIEW));
        if summary.digits > PREVIEW {
            writeln!(self.out, "{preview}...")
        } else {
            writeln!(self.out, "{preview}")
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
