//! An ordered test execution engine.
//!
//! A host hands kirun a list of [`Test`](test::Test)s and the subject they
//! run against. The [`TestHarness`] sorts the tests by their declared
//! [`Priority`](priority::Priority), runs them one at a time either on the
//! harness thread or on a pool worker, notifies a
//! [`TestListener`](listener::TestListener) about every test, and returns a
//! [`RunSummary`](aggregator::RunSummary).
//!
//! ```
//! use kirun::test::{ExecutionMode, Test, TestFnHandle, TestMeta};
//!
//! let tests = [
//!     Test::new(
//!         TestFnHandle::from_boxed(|list: &Vec<u32>| assert_eq!(list.len(), 3)),
//!         TestMeta {
//!             name: "length".into(),
//!             priority: 2.into(),
//!             mode: ExecutionMode::Concurrent,
//!         },
//!     ),
//!     Test::new(
//!         TestFnHandle::from_boxed(|list: &Vec<u32>| assert!(list.contains(&2))),
//!         TestMeta {
//!             name: "contains".into(),
//!             priority: 1.into(),
//!             mode: ExecutionMode::Sequential,
//!         },
//!     ),
//! ];
//!
//! let report = kirun::harness(&tests).run(vec![1, 2, 3]).unwrap();
//! assert_eq!(report.summary.passed, 2);
//! ```

pub mod aggregator;
pub mod listener;
pub mod outcome;
pub mod priority;

mod strategy;
pub use strategy::*;

mod harness;
pub use harness::*;

mod report;
pub use report::*;

mod error;
pub use error::*;

#[cfg(test)]
mod test_support;
