use std::convert::Infallible;

use tracing::{debug, info, warn};

use crate::{
    aggregator::RunSummary,
    listener::TestListener,
    outcome::{TestFailure, TestOutcome},
    test::TestMeta,
};

/// A listener that turns every event into a [`tracing`] event.
///
/// Rendering is left to whatever subscriber the host installed.
#[derive(Debug, Default, Clone)]
pub struct LogListener;

impl TestListener for LogListener {
    type Error = Infallible;

    fn run_started(&mut self, count: usize) -> Result<(), Self::Error> {
        info!(tests = count, "running tests");
        Ok(())
    }

    fn test_started(&mut self, meta: &TestMeta) -> Result<(), Self::Error> {
        debug!(
            test = %meta.name,
            priority = ?meta.priority,
            mode = ?meta.mode,
            "test started"
        );
        Ok(())
    }

    fn test_finished(&mut self, meta: &TestMeta, outcome: &TestOutcome) -> Result<(), Self::Error> {
        info!(
            test = %meta.name,
            duration_ms = outcome.duration.as_millis(),
            "test passed"
        );
        Ok(())
    }

    fn test_failed(
        &mut self,
        meta: &TestMeta,
        failure: &TestFailure,
        outcome: &TestOutcome,
    ) -> Result<(), Self::Error> {
        warn!(
            test = %meta.name,
            cause = ?failure,
            duration_ms = outcome.duration.as_millis(),
            "test failed"
        );
        Ok(())
    }

    fn run_finished(&mut self, summary: &RunSummary) -> Result<(), Self::Error> {
        info!(
            total = summary.total,
            passed = summary.passed,
            failed = summary.failed,
            elapsed_ms = summary.elapsed_millis(),
            "test run finished"
        );
        Ok(())
    }
}
