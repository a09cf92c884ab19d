use std::time::Instant;

use crate::{
    aggregator::RunAggregator,
    outcome::{TestOutcome, TestStatus},
    runner::TestRunner,
    test::TestMeta,
};

/// Runs the test on the calling thread.
///
/// There is no timeout, a hanging test hangs the run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SequentialRunner;

impl SequentialRunner {
    pub fn new() -> Self {
        Self
    }
}

impl TestRunner for SequentialRunner {
    fn run<F>(&self, f: F, _: &TestMeta, aggregator: &RunAggregator) -> TestOutcome
    where
        F: (FnOnce() -> TestStatus) + Send,
    {
        let now = Instant::now();
        let status = f();
        let duration = now.elapsed();
        aggregator.record(&status);
        TestOutcome { status, duration }
    }
}
