pub use test::TestHarness;

use crate::{
    listener::LogListener,
    panic::DefaultPanicHandler,
    runner::{ConcurrentRunner, SequentialRunner},
    test::Test,
};

/// Build a harness for `tests` with the default strategies.
///
/// Panics are caught by [`DefaultPanicHandler`], concurrent tests get a pool
/// sized to the available parallelism, and events are emitted through
/// [`LogListener`].
pub fn harness<'t, Subject>(
    tests: &'t [Test<Subject>],
) -> TestHarness<'t, Subject, DefaultPanicHandler, SequentialRunner, ConcurrentRunner, LogListener>
{
    TestHarness {
        tests,
        panic_handler: DefaultPanicHandler,
        sequential: SequentialRunner,
        concurrent: ConcurrentRunner::default(),
        listener: LogListener,
    }
}
