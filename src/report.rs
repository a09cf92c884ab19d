use crate::{aggregator::RunSummary, listener::ListenerEvent};

#[derive(Debug)]
#[non_exhaustive]
pub struct TestReport<ListenerError> {
    pub summary: RunSummary,
    pub listener_errors: Vec<(ListenerEvent, ListenerError)>,
}

impl<ListenerError> TestReport<ListenerError> {
    pub fn is_success(&self) -> bool {
        self.summary.is_success()
    }
}
