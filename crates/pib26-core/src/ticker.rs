//! Progress reporting for long-running iterations.
//!
//! Newton iteration calls [`ProgressTicker::set_max`] once with the target
//! precision in base-26 digits, then [`ProgressTicker::set_cur`] at every
//! precision doubling, each followed by [`ProgressTicker::print`], and
//! [`ProgressTicker::finish`] at the end. A ticker is advisory and never
//! fails.

use tracing::{debug, info};

/// Receives progress from an iteration.
pub trait ProgressTicker {
    fn set_max(&mut self, max: usize);

    fn set_cur(&mut self, cur: usize);

    /// Render the current state.
    fn print(&mut self);

    /// Called once when the iteration is done.
    fn finish(&mut self);
}

impl<T: ProgressTicker + ?Sized> ProgressTicker for &mut T {
    fn set_max(&mut self, max: usize) {
        (**self).set_max(max);
    }

    fn set_cur(&mut self, cur: usize) {
        (**self).set_cur(cur);
    }

    fn print(&mut self) {
        (**self).print();
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

impl<T: ProgressTicker + ?Sized> ProgressTicker for Box<T> {
    fn set_max(&mut self, max: usize) {
        (**self).set_max(max);
    }

    fn set_cur(&mut self, cur: usize) {
        (**self).set_cur(cur);
    }

    fn print(&mut self) {
        (**self).print();
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

/// Ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpTicker;

impl ProgressTicker for NoOpTicker {
    fn set_max(&mut self, _max: usize) {}
    fn set_cur(&mut self, _cur: usize) {}
    fn print(&mut self) {}
    fn finish(&mut self) {}
}

/// Reports progress as tracing events.
#[derive(Debug, Clone)]
pub struct LoggingTicker {
    label: String,
    max: usize,
    cur: usize,
}

impl LoggingTicker {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            max: 0,
            cur: 0,
        }
    }

    /// Progress as a fraction in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fraction(&self) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            (self.cur as f64 / self.max as f64).min(1.0)
        }
    }
}

impl ProgressTicker for LoggingTicker {
    fn set_max(&mut self, max: usize) {
        self.max = max;
        self.cur = 0;
    }

    fn set_cur(&mut self, cur: usize) {
        self.cur = cur;
    }

    fn print(&mut self) {
        debug!(
            label = %self.label,
            cur = self.cur,
            max = self.max,
            progress = self.fraction(),
            "newton progress"
        );
    }

    fn finish(&mut self) {
        self.cur = self.max;
        info!(label = %self.label, digits = self.max, "newton iteration finished");
    }
}
