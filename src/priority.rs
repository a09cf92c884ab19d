//! Declared run order.
//!
//! Tests are dispatched by ascending [`Priority`].
//! Tests without an explicit priority run after every test that has one, and
//! tests sharing a priority keep the order in which they were declared.

use crate::test::Test;

/// The declared position of a test in the run order.
///
/// Lower explicit values run earlier.
/// [`Priority::Unset`] compares greater than every explicit value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Explicit(i32),
    #[default]
    Unset,
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self::Explicit(value)
    }
}

impl From<Option<i32>> for Priority {
    fn from(value: Option<i32>) -> Self {
        match value {
            Some(value) => Self::Explicit(value),
            None => Self::Unset,
        }
    }
}

/// Put `tests` into dispatch order.
///
/// The sort is stable, ties keep their declaration order.
pub fn schedule<Subject>(tests: &[Test<Subject>]) -> Vec<&Test<Subject>> {
    let mut ordered: Vec<_> = tests.iter().collect();
    ordered.sort_by_key(|test| test.priority);
    ordered
}
