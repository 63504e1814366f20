//! Progress tracking for long-running loops
//!
//! A [`ProgressTracker`] counts units of work and, every `report_every`
//! units, hands a [`ProgressReport`] to the [`ProgressSink`] it was built
//! with. The default sink, [`TracingSink`], logs the report at INFO level.

use std::fmt;
use std::time::{Duration, Instant};
use tracing::{info, Level};

/// Number of units between two reports
pub const DEFAULT_REPORT_EVERY: u64 = 1000;

/// Snapshot of a tracker at a reporting boundary
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport {
    pub completed: u64,
    pub total: u64,
    /// Percentage of `total` completed; may exceed 100 when the estimate was low
    pub percent: f64,
    /// Iterations per second since the previous report
    pub rate: f64,
    /// Time left at the current rate, `None` when the rate is zero
    pub eta: Option<Duration>,
}

impl fmt::Display for ProgressReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:3.0}%] Completed {} iterations of {} total input. {:.0} iters/s. ETA ",
            self.percent, self.completed, self.total, self.rate
        )?;
        match self.eta {
            Some(eta) => {
                let secs = eta.as_secs();
                write!(f, "{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
            }
            None => write!(f, "--:--:--"),
        }
    }
}

/// Destination for progress reports
pub trait ProgressSink {
    fn report(&self, report: &ProgressReport);

    /// Reports are only built when this returns true
    fn enabled(&self) -> bool {
        true
    }
}

impl<F: Fn(&ProgressReport)> ProgressSink for F {
    fn report(&self, report: &ProgressReport) {
        self(report)
    }
}

/// Logs reports through `tracing` at INFO level
#[derive(Debug, Clone)]
pub struct TracingSink {
    name: String,
}

impl TracingSink {
    /// `name` tags every event, e.g. the file being processed
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl ProgressSink for TracingSink {
    fn report(&self, report: &ProgressReport) {
        info!(tracker = %self.name, "{}", report);
    }

    fn enabled(&self) -> bool {
        tracing::enabled!(Level::INFO)
    }
}

/// Tracks the progress of a long-running computation
#[derive(Debug)]
pub struct ProgressTracker<S> {
    sink: S,
    total: u64,
    report_every: u64,
    count: u64,
    prev_count: u64,
    tick: Instant,
}

impl<S: ProgressSink> ProgressTracker<S> {
    /// Build a tracker expecting `estimated_iterations` units of work
    pub fn new(estimated_iterations: u64, sink: S) -> Self {
        Self {
            sink,
            total: estimated_iterations,
            report_every: DEFAULT_REPORT_EVERY,
            count: 0,
            prev_count: 0,
            tick: Instant::now(),
        }
    }

    /// Report every `every` units instead of every 1000; 0 is treated as 1
    #[must_use]
    pub fn with_report_every(mut self, every: u64) -> Self {
        self.report_every = every.max(1);
        self
    }

    /// Record one unit of progress
    #[inline]
    pub fn progress(&mut self) {
        self.progress_at(Instant::now());
    }

    fn progress_at(&mut self, now: Instant) {
        self.count += 1;
        if self.count % self.report_every != 0 || !self.sink.enabled() {
            return;
        }

        let elapsed = now.saturating_duration_since(self.tick).as_secs_f64();
        let done = (self.count - self.prev_count) as f64;
        let rate = if elapsed > 0.0 { done / elapsed } else { f64::INFINITY };
        self.tick = now;
        self.prev_count = self.count;

        let remaining = self.total.saturating_sub(self.count) as f64;
        let eta = if rate > 0.0 {
            Duration::try_from_secs_f64(remaining / rate).ok()
        } else {
            None
        };

        let percent = if self.total == 0 {
            100.0
        } else {
            100.0 * self.count as f64 / self.total as f64
        };

        self.sink.report(&ProgressReport {
            completed: self.count,
            total: self.total,
            percent,
            rate,
            eta,
        });
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> u64 {
        self.count
    }

    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.total
    }
}
