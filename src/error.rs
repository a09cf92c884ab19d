use std::error::Error;

use thiserror::Error;

/// Errors that stop a run before any test starts.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunError {
    #[error("test subject could not be instantiated")]
    Instantiation(#[source] Box<dyn Error + Send + Sync + 'static>),

    #[error("test `{0}` is declared more than once")]
    DuplicateName(String),
}
