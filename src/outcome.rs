use std::time::Duration;

use crate::test::TestResult;

/// The terminal result of one test invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct TestOutcome {
    pub status: TestStatus,
    pub duration: Duration,
}

impl TestOutcome {
    pub fn new(status: TestStatus, duration: Duration) -> Self {
        Self { status, duration }
    }

    pub fn passed(&self) -> bool {
        self.status.passed()
    }

    pub fn failed(&self) -> bool {
        self.status.failed()
    }

    /// The captured failure, present iff the test failed.
    pub fn cause(&self) -> Option<&TestFailure> {
        match &self.status {
            TestStatus::Passed => None,
            TestStatus::Failed(failure) => Some(failure),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestStatus {
    Passed,
    Failed(TestFailure),
}

impl TestStatus {
    pub fn passed(&self) -> bool {
        matches!(self, TestStatus::Passed)
    }

    pub fn failed(&self) -> bool {
        matches!(self, TestStatus::Failed(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TestFailure {
    /// The test body returned an error.
    Error(String),

    /// The test body panicked, holding the panic message.
    Panicked(String),

    /// The wait for a concurrent test was interrupted before it completed.
    Interrupted,

    /// The worker pool refused the unit of work, or dropped it before it ran.
    Rejected(String),
}

impl From<TestResult> for TestStatus {
    fn from(value: TestResult) -> Self {
        match value.0 {
            Ok(_) => TestStatus::Passed,
            Err(err) => TestStatus::Failed(TestFailure::Error(err)),
        }
    }
}
