//! Panic handling for kirun.
//!
//! Rust test bodies signal failure by panicking (for example through
//! `assert!`) or by returning an error. A panic handler executes the test
//! function and turns both into a structured [`TestStatus`].
//!
//! The runner decides where a test executes, the panic handler is the piece
//! that actually runs it.

use std::panic::UnwindSafe;

use crate::{
    outcome::TestStatus,
    test::{TestMeta, TestResult},
};

mod no;
pub use no::*;

mod default;
pub use default::*;

/// A strategy for executing a test function and translating panics into a [`TestStatus`].
///
/// Handlers are called from the harness thread and from pool workers, so they
/// are passed by shared reference.
pub trait TestPanicHandler {
    /// Execute `f` and return its [`TestStatus`].
    fn handle<F: FnOnce() -> TestResult + UnwindSafe>(&self, f: F, meta: &TestMeta) -> TestStatus;
}
