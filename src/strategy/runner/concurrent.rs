use std::{
    num::NonZeroUsize,
    panic::{AssertUnwindSafe, catch_unwind},
    sync::OnceLock,
    thread,
    time::Instant,
};

use crossbeam_channel::{Receiver, RecvError};
use tracing::{debug, warn};

use crate::{
    aggregator::RunAggregator,
    outcome::{TestFailure, TestOutcome, TestStatus},
    panic::DefaultPanicHandler,
    runner::{InterruptHandle, PoolError, TestRunner, WorkerPool},
    test::TestMeta,
};

/// Runs the test on a worker of a freshly built [`WorkerPool`].
///
/// The pool lives for exactly one test: it is built, receives a single unit
/// of work, and is shut down as soon as the test completed. The calling
/// thread blocks on the completion of that unit, without a timeout, unless an
/// [`InterruptHandle`] releases it early.
#[derive(Debug, Clone)]
pub struct ConcurrentRunner {
    threads: NonZeroUsize,
    interrupt: Option<InterruptHandle>,
}

impl Default for ConcurrentRunner {
    fn default() -> Self {
        Self {
            threads: thread::available_parallelism().unwrap_or(NonZeroUsize::MIN),
            interrupt: None,
        }
    }
}

impl ConcurrentRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thread_count(self, count: NonZeroUsize) -> Self {
        Self {
            threads: count,
            ..self
        }
    }

    pub fn with_interrupt_handle(self, interrupt: InterruptHandle) -> Self {
        Self {
            interrupt: Some(interrupt),
            ..self
        }
    }

    pub fn thread_count(&self) -> NonZeroUsize {
        self.threads
    }

    fn wait(&self, done: &Receiver<TestStatus>) -> Wake {
        match &self.interrupt {
            None => done.recv().into(),
            Some(interrupt) => crossbeam_channel::select! {
                recv(done) -> msg => msg.into(),
                recv(interrupt.receiver()) -> _ => Wake::Interrupted,
            },
        }
    }

    /// Settle the test from the waiting side once the unit was handed over.
    ///
    /// Returns the status that was recorded for the test, which is the
    /// worker's if it settled first.
    fn conclude(
        &self,
        submitted: Result<(), PoolError>,
        done: &Receiver<TestStatus>,
        settlement: &Settlement<'_>,
        meta: &TestMeta,
    ) -> TestStatus {
        if let Err(err) = submitted {
            warn!(test = %meta.name, %err, "worker pool rejected test");
            return settlement
                .settle(TestStatus::Failed(TestFailure::Rejected(err.to_string())))
                .clone();
        }

        match self.wait(done) {
            Wake::Completed(status) => status,
            Wake::Interrupted => {
                let settled = settlement.settle(TestStatus::Failed(TestFailure::Interrupted));
                if matches!(settled, TestStatus::Failed(TestFailure::Interrupted)) {
                    warn!(test = %meta.name, "interrupted while waiting for test");
                }
                settled.clone()
            }
            Wake::Abandoned => {
                warn!(test = %meta.name, "unit of work dropped before it ran");
                settlement
                    .settle(TestStatus::Failed(TestFailure::Rejected(String::from(
                        "unit of work dropped before it ran",
                    ))))
                    .clone()
            }
        }
    }
}

enum Wake {
    Completed(TestStatus),
    Interrupted,
    Abandoned,
}

impl From<Result<TestStatus, RecvError>> for Wake {
    fn from(value: Result<TestStatus, RecvError>) -> Self {
        match value {
            Ok(status) => Wake::Completed(status),
            // The unit of work was dropped without ever running.
            Err(RecvError) => Wake::Abandoned,
        }
    }
}

/// Decides which thread reports a concurrent test.
///
/// The worker settles with the test status, the waiting thread settles with a
/// failure when it stops waiting early. Only the first settlement counts and
/// only that one reaches the aggregator.
struct Settlement<'a> {
    status: OnceLock<TestStatus>,
    aggregator: &'a RunAggregator,
}

impl<'a> Settlement<'a> {
    fn new(aggregator: &'a RunAggregator) -> Self {
        Self {
            status: OnceLock::new(),
            aggregator,
        }
    }

    /// Offer `status` and get back the one that won.
    fn settle(&self, status: TestStatus) -> &TestStatus {
        let mut won = false;
        let settled = self.status.get_or_init(|| {
            won = true;
            status
        });
        if won {
            self.aggregator.record(settled);
        }
        settled
    }
}

impl TestRunner for ConcurrentRunner {
    fn run<F>(&self, f: F, meta: &TestMeta, aggregator: &RunAggregator) -> TestOutcome
    where
        F: (FnOnce() -> TestStatus) + Send,
    {
        let now = Instant::now();
        let settlement = Settlement::new(aggregator);

        let status = thread::scope(|scope| {
            let mut pool = WorkerPool::new(self.threads, scope);
            let (dtx, drx) = crossbeam_channel::bounded(1);
            let settlement = &settlement;

            let submitted = pool.submit(move || {
                let status = catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|err| {
                    TestStatus::Failed(TestFailure::Panicked(
                        DefaultPanicHandler::payload_as_string(err),
                    ))
                });
                let settled = settlement.settle(status).clone();
                // The waiter may have been interrupted and stopped listening.
                let _ = dtx.send(settled);
            });

            let status = self.conclude(submitted, &drx, settlement, meta);
            pool.shutdown();
            debug!(test = %meta.name, "concurrent test settled");
            status
        });

        TestOutcome {
            status,
            duration: now.elapsed(),
        }
    }
}
