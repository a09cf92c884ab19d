//! A bounded pool of scoped worker threads.
//!
//! The pool is tied to a [`thread::scope`](std::thread::scope), so jobs may
//! borrow from the surrounding stack frame. Shutting the pool down (or
//! dropping it) stops accepting jobs, lets queued and running jobs finish,
//! and joins every worker.

use std::{
    num::NonZeroUsize,
    panic::{AssertUnwindSafe, catch_unwind},
    thread::{Scope, ScopedJoinHandle},
};

use thiserror::Error;
use tracing::{debug, warn};

use crate::panic::DefaultPanicHandler;

type Job<'s> = Box<dyn FnOnce() + Send + 's>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PoolError {
    #[error("worker pool is shut down")]
    ShutDown,

    #[error("no worker is left to accept the job")]
    NoWorkers,
}

#[derive(Debug)]
pub struct WorkerPool<'s> {
    jobs: Option<crossbeam_channel::Sender<Job<'s>>>,
    workers: Vec<ScopedJoinHandle<'s, ()>>,
}

impl<'s> WorkerPool<'s> {
    /// Spawn `size` workers inside `scope`.
    pub fn new<'e>(size: NonZeroUsize, scope: &'s Scope<'s, 'e>) -> Self {
        let (jtx, jrx) = crossbeam_channel::unbounded::<Job<'s>>();
        let workers = (0..size.get())
            .map(|worker| {
                let jrx = jrx.clone();
                scope.spawn(move || {
                    while let Ok(job) = jrx.recv() {
                        if let Err(err) = catch_unwind(AssertUnwindSafe(job)) {
                            warn!(
                                worker,
                                panic = %DefaultPanicHandler::payload_as_string(err),
                                "pool job panicked"
                            );
                        }
                    }
                })
            })
            .collect();
        debug!(size = size.get(), "worker pool started");

        Self {
            jobs: Some(jtx),
            workers,
        }
    }

    /// Queue `job` for execution on one of the workers.
    pub fn submit<F>(&self, job: F) -> Result<(), PoolError>
    where
        F: FnOnce() + Send + 's,
    {
        let jobs = self.jobs.as_ref().ok_or(PoolError::ShutDown)?;
        jobs.send(Box::new(job)).map_err(|_| PoolError::NoWorkers)
    }

    /// Stop accepting jobs and wait for the workers to drain the queue.
    ///
    /// Calling this more than once is a no-op.
    pub fn shutdown(&mut self) {
        // Dropping the sender ends every worker loop once the queue is empty.
        if self.jobs.take().is_none() {
            return;
        }

        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                warn!("pool worker panicked outside of a job");
            }
        }
        debug!("worker pool shut down");
    }

    pub fn is_shutdown(&self) -> bool {
        self.jobs.is_none()
    }
}

impl Drop for WorkerPool<'_> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
