//! Run wide counters and timing.
//!
//! A [`RunAggregator`] is shared by the harness thread and every pool worker.
//! Each test is recorded exactly once by whichever thread settled its outcome.
//! The counters are only read back as a [`RunSummary`] once the run is over.

use std::{
    process::ExitCode,
    sync::atomic::{AtomicUsize, Ordering},
    time::{Duration, Instant},
};

use crate::outcome::TestStatus;

#[derive(Debug)]
pub struct RunAggregator {
    started: Instant,
    total: AtomicUsize,
    passed: AtomicUsize,
    failed: AtomicUsize,
}

impl Default for RunAggregator {
    fn default() -> Self {
        Self::start()
    }
}

impl RunAggregator {
    /// Create an aggregator whose clock starts now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            total: AtomicUsize::new(0),
            passed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        }
    }

    pub fn record_passed(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
        self.passed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self) {
        self.total.fetch_add(1, Ordering::Relaxed);
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record(&self, status: &TestStatus) {
        match status {
            TestStatus::Passed => self.record_passed(),
            TestStatus::Failed(_) => self.record_failed(),
        }
    }

    /// Read the counters and stop the clock.
    ///
    /// Only meaningful once every recording thread has been joined or has
    /// handed its outcome back, which the harness guarantees at the end of a run.
    pub fn snapshot(&self) -> RunSummary {
        RunSummary {
            total: self.total.load(Ordering::Relaxed),
            passed: self.passed.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            duration: self.started.elapsed(),
        }
    }
}

/// Aggregate result of a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct RunSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration: Duration,
}

impl RunSummary {
    pub fn elapsed_millis(&self) -> u128 {
        self.duration.as_millis()
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn exit_code(&self) -> ExitCode {
        match self.is_success() {
            true => ExitCode::SUCCESS,
            false => ExitCode::FAILURE,
        }
    }
}
