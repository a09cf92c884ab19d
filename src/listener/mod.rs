//! Listeners observe a run as it happens.
//!
//! The harness notifies its [`TestListener`] from the harness thread only, in
//! dispatch order: every test gets a `test_started` call followed by exactly
//! one of `test_finished` or `test_failed`.
//! The one exception is a sequential test run with
//! [`NoPanicHandler`](crate::panic::NoPanicHandler): its panic unwinds out of
//! the harness right after `test_started`, and nothing else is reported.
//!
//! Listener errors never abort a run. The harness collects them together
//! with the [`ListenerEvent`] that produced them and hands them back in the
//! [`TestReport`](crate::TestReport).

use crate::{
    aggregator::RunSummary,
    outcome::{TestFailure, TestOutcome},
    test::TestMeta,
};

mod no;
pub use no::*;

mod log;
pub use log::*;

/// The listener call that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerEvent {
    RunStarted,
    TestStarted,
    TestFinished,
    TestFailed,
    RunFinished,
}

pub trait TestListener {
    type Error;

    /// Called once, before the first test starts, with the number of tests.
    fn run_started(&mut self, count: usize) -> Result<(), Self::Error> {
        let _ = count;
        Ok(())
    }

    fn test_started(&mut self, meta: &TestMeta) -> Result<(), Self::Error>;

    fn test_finished(&mut self, meta: &TestMeta, outcome: &TestOutcome)
    -> Result<(), Self::Error>;

    fn test_failed(
        &mut self,
        meta: &TestMeta,
        failure: &TestFailure,
        outcome: &TestOutcome,
    ) -> Result<(), Self::Error>;

    /// Called once, after the last test produced its outcome.
    fn run_finished(&mut self, summary: &RunSummary) -> Result<(), Self::Error> {
        let _ = summary;
        Ok(())
    }
}

impl<L: TestListener + ?Sized> TestListener for &mut L {
    type Error = L::Error;

    fn run_started(&mut self, count: usize) -> Result<(), Self::Error> {
        (**self).run_started(count)
    }

    fn test_started(&mut self, meta: &TestMeta) -> Result<(), Self::Error> {
        (**self).test_started(meta)
    }

    fn test_finished(
        &mut self,
        meta: &TestMeta,
        outcome: &TestOutcome,
    ) -> Result<(), Self::Error> {
        (**self).test_finished(meta, outcome)
    }

    fn test_failed(
        &mut self,
        meta: &TestMeta,
        failure: &TestFailure,
        outcome: &TestOutcome,
    ) -> Result<(), Self::Error> {
        (**self).test_failed(meta, failure, outcome)
    }

    fn run_finished(&mut self, summary: &RunSummary) -> Result<(), Self::Error> {
        (**self).run_finished(summary)
    }
}

pub(crate) trait ListenerErrors<E> {
    fn push_on_error(&mut self, event: ListenerEvent, result: Result<(), E>);
}

impl<E> ListenerErrors<E> for Vec<(ListenerEvent, E)> {
    fn push_on_error(&mut self, event: ListenerEvent, result: Result<(), E>) {
        if let Err(err) = result {
            self.push((event, err));
        }
    }
}
