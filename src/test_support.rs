use std::{
    borrow::Cow,
    convert::Infallible,
    sync::{Arc, Mutex},
};

use crate::{
    TestHarness,
    aggregator::RunSummary,
    listener::{NoListener, TestListener},
    outcome::{TestFailure, TestOutcome},
    panic::DefaultPanicHandler,
    priority::Priority,
    runner::{ConcurrentRunner, SequentialRunner},
    test::{ExecutionMode, Test, TestFnHandle, TestMeta},
};

pub struct BuildTest<Subject> {
    pub func: TestFnHandle<Subject>,
    pub name: Cow<'static, str>,
    pub priority: Priority,
    pub mode: ExecutionMode,
}

impl<Subject> Default for BuildTest<Subject> {
    fn default() -> Self {
        Self {
            func: TestFnHandle::default(),
            name: Default::default(),
            priority: Default::default(),
            mode: Default::default(),
        }
    }
}

impl<Subject> From<BuildTest<Subject>> for Test<Subject> {
    fn from(value: BuildTest<Subject>) -> Self {
        Test::new(
            value.func,
            TestMeta {
                name: value.name,
                priority: value.priority,
                mode: value.mode,
            },
        )
    }
}

macro_rules! test {
    {$($field:ident: $value:expr),* $(,)?} => {
        $crate::test::Test::from($crate::test_support::BuildTest {
            $($field: $crate::test_support::build_field!($field, $value),)*
            ..($crate::test_support::BuildTest {
                name: concat!(module_path!(), "::", file!(), ":", line!(), ":", column!()).into(),
                ..Default::default()
            })
        })
    };
}

// Closures need a direct `Fn` bound to get a higher ranked signature.
macro_rules! build_field {
    (func, $value:expr) => {
        $crate::test::TestFnHandle::from_boxed($value)
    };
    ($field:ident, $value:expr) => {
        ::std::convert::From::from($value)
    };
}

pub(crate) use build_field;
pub(crate) use test;

pub fn harness<'t, Subject>(
    tests: &'t [Test<Subject>],
) -> TestHarness<'t, Subject, DefaultPanicHandler, SequentialRunner, ConcurrentRunner, NoListener>
{
    TestHarness {
        tests,
        panic_handler: DefaultPanicHandler,
        sequential: SequentialRunner,
        concurrent: ConcurrentRunner::default(),
        listener: NoListener,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    RunStarted(usize),
    Started(String),
    Finished(String),
    Failed(String, TestFailure),
    RunFinished {
        total: usize,
        passed: usize,
        failed: usize,
    },
}

/// Records every listener call, clones share the same log.
#[derive(Debug, Default, Clone)]
pub struct RecordingListener(Arc<Mutex<Vec<Event>>>);

impl RecordingListener {
    fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    pub fn started(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Started(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn finished(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Finished(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn failed(&self) -> Vec<String> {
        self.failures().into_iter().map(|(name, _)| name).collect()
    }

    pub fn failures(&self) -> Vec<(String, TestFailure)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Failed(name, failure) => Some((name, failure)),
                _ => None,
            })
            .collect()
    }
}

impl TestListener for RecordingListener {
    type Error = Infallible;

    fn run_started(&mut self, count: usize) -> Result<(), Self::Error> {
        self.push(Event::RunStarted(count));
        Ok(())
    }

    fn test_started(&mut self, meta: &TestMeta) -> Result<(), Self::Error> {
        self.push(Event::Started(meta.name.to_string()));
        Ok(())
    }

    fn test_finished(&mut self, meta: &TestMeta, _: &TestOutcome) -> Result<(), Self::Error> {
        self.push(Event::Finished(meta.name.to_string()));
        Ok(())
    }

    fn test_failed(
        &mut self,
        meta: &TestMeta,
        failure: &TestFailure,
        _: &TestOutcome,
    ) -> Result<(), Self::Error> {
        self.push(Event::Failed(meta.name.to_string(), failure.clone()));
        Ok(())
    }

    fn run_finished(&mut self, summary: &RunSummary) -> Result<(), Self::Error> {
        self.push(Event::RunFinished {
            total: summary.total,
            passed: summary.passed,
            failed: summary.failed,
        });
        Ok(())
    }
}

macro_rules! nonzero {
    (0) => {
        compile_error!("0 is zero")
    };

    ($value:literal) => {
        std::convert::TryFrom::try_from($value).unwrap()
    };
}

pub(crate) use nonzero;
