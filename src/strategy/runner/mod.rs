//! Test execution strategies for kirun.
//!
//! A runner executes one test at a time and produces its [`TestOutcome`].
//! The harness picks the runner per test from the test's
//! [`ExecutionMode`](crate::test::ExecutionMode) and always waits for the
//! outcome before moving on to the next test.
//!
//! The harness passes the runner a test execution function that already
//! includes panic handling (it returns a [`TestStatus`]), so the runner can
//! focus on where the test runs, timing, and recording the result.
//!
//! Implement [`TestRunner`] to change how a single test is executed.

use crate::{
    aggregator::RunAggregator,
    outcome::{TestOutcome, TestStatus},
    test::TestMeta,
};

mod sequential;
pub use sequential::*;

mod concurrent;
pub use concurrent::*;

mod interrupt;
pub use interrupt::*;

mod pool;
pub use pool::*;

/// A strategy for running a single test and producing its [`TestOutcome`].
pub trait TestRunner {
    /// Run `f` and return the outcome of the test described by `meta`.
    ///
    /// The runner must record the resulting status in `aggregator` exactly
    /// once, and the status it records must be the one it returns.
    /// Returning means the test is over, the harness never sees a runner
    /// return while the test body is still executing.
    fn run<F>(&self, f: F, meta: &TestMeta, aggregator: &RunAggregator) -> TestOutcome
    where
        F: (FnOnce() -> TestStatus) + Send;
}
