use crossbeam_channel::{Receiver, Sender};

/// Interrupts a harness thread that is waiting on a concurrent test.
///
/// Interrupts do not stop the test body, they only release the waiting
/// thread, which then reports the test as
/// [`TestFailure::Interrupted`](crate::outcome::TestFailure::Interrupted).
/// An interrupt raised while nothing waits stays pending until the next wait
/// consumes it. Raising it again while pending has no further effect.
#[derive(Debug, Clone)]
pub struct InterruptHandle {
    tx: Sender<()>,
    rx: Receiver<()>,
}

impl Default for InterruptHandle {
    fn default() -> Self {
        let (tx, rx) = crossbeam_channel::bounded(1);
        Self { tx, rx }
    }
}

impl InterruptHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn interrupt(&self) {
        // Full means an interrupt is already pending.
        let _ = self.tx.try_send(());
    }

    pub fn is_pending(&self) -> bool {
        !self.rx.is_empty()
    }

    /// Drop a pending interrupt, if any.
    pub fn clear(&self) {
        let _ = self.rx.try_recv();
    }

    pub(crate) fn receiver(&self) -> &Receiver<()> {
        &self.rx
    }
}
