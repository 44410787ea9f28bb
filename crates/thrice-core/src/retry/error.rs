//! Terminal retry error
//!
//! `RetryExhausted` is returned once the final permitted attempt fails. It
//! carries that attempt's error unchanged and nothing else: no attempt count
//! and no history of earlier failures.

use std::error::Error;
use std::fmt;

/// All attempts failed; holds the error raised by the last one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryExhausted<E> {
    source: E,
}

impl<E> RetryExhausted<E> {
    /// Create a new exhausted error from the final attempt's error
    pub fn new(source: E) -> Self {
        Self { source }
    }

    /// Get the underlying error, consuming this error
    pub fn into_source(self) -> E {
        self.source
    }

    /// Get a reference to the underlying error
    pub fn source_ref(&self) -> &E {
        &self.source
    }

    /// Map the error type using a closure
    pub fn map_err<F, E2>(self, f: F) -> RetryExhausted<E2>
    where
        F: FnOnce(E) -> E2,
    {
        RetryExhausted {
            source: f(self.source),
        }
    }
}

impl<E: fmt::Display> fmt::Display for RetryExhausted<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "retry exhausted: {}", self.source)
    }
}

impl<E: Error + 'static> Error for RetryExhausted<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}
