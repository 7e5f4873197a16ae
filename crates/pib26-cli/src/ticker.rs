//! Terminal progress tickers.
//!
//! Each ticker redraws a single line with a carriage return and ends it on
//! [`ProgressTicker::finish`]. Write errors are ignored: progress output is
//! advisory.

use std::io::{self, Write};

use indicatif::{ProgressBar, ProgressStyle};
use pib26_core::ProgressTicker;
use tracing::{debug, warn};

/// Dots shown by [`DotsTicker::new`].
pub const DEFAULT_DOTS: usize = 50;

/// `label : [.....     ]`, redrawn only when the number of dots changes.
pub struct DotsTicker<W: Write = io::Stdout> {
    label: String,
    num_dots: usize,
    max: usize,
    cur: usize,
    shown: Option<usize>,
    out: W,
}

impl DotsTicker {
    /// A ticker on stdout with [`DEFAULT_DOTS`] dots.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_writer(label, DEFAULT_DOTS, io::stdout())
    }
}

impl<W: Write> DotsTicker<W> {
    pub fn with_writer(label: impl Into<String>, num_dots: usize, out: W) -> Self {
        Self {
            label: label.into(),
            num_dots,
            max: 100,
            cur: 0,
            shown: None,
            out,
        }
    }

    /// Dots the current state calls for.
    fn dots(&self) -> usize {
        if self.max == 0 {
            return self.num_dots;
        }
        (self.num_dots * self.cur / self.max).min(self.num_dots)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressTicker for DotsTicker<W> {
    fn set_max(&mut self, max: usize) {
        self.max = max;
    }

    fn set_cur(&mut self, cur: usize) {
        self.cur = cur;
    }

    fn print(&mut self) {
        let dots = self.dots();
        if self.shown == Some(dots) {
            return;
        }
        let bar: String = (0..self.num_dots)
            .map(|i| if i < dots { '.' } else { ' ' })
            .collect();
        let _ = write!(self.out, "{} : [{bar}]\r", self.label);
        let _ = self.out.flush();
        self.shown = Some(dots);
    }

    fn finish(&mut self) {
        let _ = writeln!(self.out);
        let _ = self.out.flush();
        self.shown = None;
    }
}

/// `label : cur / max`.
pub struct LabelTicker<W: Write = io::Stdout> {
    label: String,
    max: usize,
    cur: usize,
    out: W,
}

impl LabelTicker {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_writer(label, io::stdout())
    }
}

impl<W: Write> LabelTicker<W> {
    pub fn with_writer(label: impl Into<String>, out: W) -> Self {
        Self {
            label: label.into(),
            max: 100,
            cur: 0,
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ProgressTicker for LabelTicker<W> {
    fn set_max(&mut self, max: usize) {
        self.max = max;
    }

    fn set_cur(&mut self, cur: usize) {
        self.cur = cur;
    }

    fn print(&mut self) {
        let _ = write!(self.out, "{} : {} / {}\r", self.label, self.cur, self.max);
        let _ = self.out.flush();
    }

    fn finish(&mut self) {
        let _ = writeln!(self.out);
        let _ = self.out.flush();
    }
}

/// An indicatif progress bar.
pub struct BarTicker {
    bar: ProgressBar,
}

impl BarTicker {
    const TEMPLATE: &'static str = "{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} digits";

    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_bar(ProgressBar::new(0), label)
    }

    /// A bar that draws nowhere.
    #[must_use]
    pub fn hidden(label: impl Into<String>) -> Self {
        Self::with_bar(ProgressBar::hidden(), label)
    }

    fn with_bar(bar: ProgressBar, label: impl Into<String>) -> Self {
        match ProgressStyle::with_template(Self::TEMPLATE) {
            Ok(style) => bar.set_style(style.progress_chars("=> ")),
            Err(err) => warn!(%err, "progress bar template rejected, using the default style"),
        }
        let label = label.into();
        debug!(label = %label, hidden = bar.is_hidden(), "progress bar created");
        bar.set_message(label);
        Self { bar }
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

fn as_u64(n: usize) -> u64 {
    u64::try_from(n).unwrap_or(u64::MAX)
}

impl ProgressTicker for BarTicker {
    fn set_max(&mut self, max: usize) {
        debug!(max, "progress bar length set");
        self.bar.set_length(as_u64(max));
    }

    fn set_cur(&mut self, cur: usize) {
        self.bar.set_position(as_u64(cur));
    }

    fn print(&mut self) {
        self.bar.tick();
    }

    fn finish(&mut self) {
        self.bar.finish();
    }
}
