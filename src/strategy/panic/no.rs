use crate::{
    outcome::TestStatus,
    panic::TestPanicHandler,
    test::{TestMeta, TestResult},
};

/// A [`TestPanicHandler`] that does not catch panics.
///
/// A panic in a sequential test unwinds through the harness.
/// Concurrent tests still fail cleanly, the pool work unit catches the unwind
/// so the waiting harness thread always gets an outcome.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NoPanicHandler;

impl TestPanicHandler for NoPanicHandler {
    fn handle<F: FnOnce() -> TestResult>(&self, f: F, _: &TestMeta) -> TestStatus {
        f().into()
    }
}
