use std::convert::Infallible;

use crate::{
    listener::TestListener,
    outcome::{TestFailure, TestOutcome},
    test::TestMeta,
};

/// A listener that discards every event.
#[derive(Debug, Default, Clone)]
pub struct NoListener;

impl TestListener for NoListener {
    type Error = Infallible;

    fn test_started(&mut self, _: &TestMeta) -> Result<(), Self::Error> {
        Ok(())
    }

    fn test_finished(&mut self, _: &TestMeta, _: &TestOutcome) -> Result<(), Self::Error> {
        Ok(())
    }

    fn test_failed(
        &mut self,
        _: &TestMeta,
        _: &TestFailure,
        _: &TestOutcome,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}
