//! Retry observation and logging
//!
//! This module provides the `RetryObserver` trait, the observability sink of
//! the retry loop, and a `TracingObserver` implementation that logs using the
//! `tracing` crate.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Observer trait for retry attempt events
///
/// `on_attempt_failed` is the sink for failure causes. It is called once for
/// every failed attempt that is followed by another attempt, so an operation
/// that fails on every try is reported twice with the default policy: the
/// final failure is returned to the caller instead.
///
/// # Example
///
/// ```rust
/// use thrice_core::retry::RetryObserver;
///
/// struct StderrObserver;
///
/// impl RetryObserver<std::io::Error> for StderrObserver {
///     fn on_attempt_failed(&self, attempt: u32, error: &std::io::Error) {
///         eprintln!("attempt {} failed: {}", attempt, error);
///     }
/// }
/// ```
pub trait RetryObserver<E: ?Sized>: Send + Sync {
    /// Called when an attempt is about to start
    ///
    /// # Arguments
    ///
    /// * `attempt` - The attempt number (1-indexed)
    /// * `max_attempts` - The maximum number of attempts configured
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        let _ = (attempt, max_attempts);
    }

    /// Called when an attempt fails and will be retried
    ///
    /// # Arguments
    ///
    /// * `attempt` - The attempt number that failed (1-indexed)
    /// * `error` - The error that caused the failure
    fn on_attempt_failed(&self, attempt: u32, error: &E);

    /// Called when the operation succeeds
    ///
    /// # Arguments
    ///
    /// * `attempt` - The attempt number that succeeded (1-indexed)
    /// * `total_duration` - Total time spent across all attempts
    fn on_success(&self, attempt: u32, total_duration: Duration) {
        let _ = (attempt, total_duration);
    }
}

/// A no-op observer that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl<E: ?Sized> RetryObserver<E> for NoOpObserver {
    fn on_attempt_failed(&self, _attempt: u32, _error: &E) {}
}

/// An observer that logs retry events using the `tracing` crate
///
/// # Log Levels
///
/// - `on_attempt_start`: DEBUG
/// - `on_attempt_failed`: WARN
/// - `on_success`: INFO (if > 1 attempt) or DEBUG (first attempt)
#[derive(Debug, Clone)]
pub struct TracingObserver {
    /// Name of the operation being retried (for log context)
    operation: String,
}

impl TracingObserver {
    /// Create a new tracing observer
    ///
    /// # Arguments
    ///
    /// * `operation` - A descriptive name for the operation being retried
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
        }
    }

    /// Get the operation name
    pub fn operation(&self) -> &str {
        &self.operation
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new("retry")
    }
}

impl<E: fmt::Display + ?Sized> RetryObserver<E> for TracingObserver {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        tracing::debug!(
            operation = %self.operation,
            attempt = attempt,
            max_attempts = max_attempts,
            "starting attempt"
        );
    }

    fn on_attempt_failed(&self, attempt: u32, error: &E) {
        tracing::warn!(
            operation = %self.operation,
            attempt = attempt,
            error = %error,
            "attempt failed, will retry"
        );
    }

    fn on_success(&self, attempt: u32, total_duration: Duration) {
        if attempt > 1 {
            tracing::info!(
                operation = %self.operation,
                attempt = attempt,
                total_duration_ms = total_duration.as_millis() as u64,
                "succeeded after retry"
            );
        } else {
            tracing::debug!(
                operation = %self.operation,
                duration_ms = total_duration.as_millis() as u64,
                "succeeded on first attempt"
            );
        }
    }
}

/// An observer that keeps every reported failure cause
///
/// Useful for testing and for callers that want to inspect what went wrong
/// on the attempts that were retried.
#[derive(Debug)]
pub struct RecordingObserver<E> {
    failures: Mutex<Vec<E>>,
    attempt_starts: AtomicU32,
    successes: AtomicU32,
}

impl<E> Default for RecordingObserver<E> {
    fn default() -> Self {
        Self {
            failures: Mutex::new(Vec::new()),
            attempt_starts: AtomicU32::new(0),
            successes: AtomicU32::new(0),
        }
    }
}

impl<E: Clone> RecordingObserver<E> {
    /// Create a new recording observer
    pub fn new() -> Self {
        Self::default()
    }

    /// Failure causes in the order they were reported
    pub fn failures(&self) -> Vec<E> {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of reported failures
    pub fn failure_count(&self) -> usize {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Get the number of attempt starts
    pub fn attempt_starts(&self) -> u32 {
        self.attempt_starts.load(Ordering::SeqCst)
    }

    /// Get the number of successes
    pub fn successes(&self) -> u32 {
        self.successes.load(Ordering::SeqCst)
    }
}

impl<E: Clone + Send> RetryObserver<E> for RecordingObserver<E> {
    fn on_attempt_start(&self, _attempt: u32, _max_attempts: u32) {
        self.attempt_starts.fetch_add(1, Ordering::SeqCst);
    }

    fn on_attempt_failed(&self, _attempt: u32, error: &E) {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(error.clone());
    }

    fn on_success(&self, _attempt: u32, _total_duration: Duration) {
        self.successes.fetch_add(1, Ordering::SeqCst);
    }
}

/// An observer that forwards failed attempts to a closure
pub struct ClosureObserver<F> {
    on_failure: F,
}

impl<F> ClosureObserver<F> {
    /// Create a new closure-based observer
    pub fn new(on_failure: F) -> Self {
        Self { on_failure }
    }
}

impl<E, F> RetryObserver<E> for ClosureObserver<F>
where
    E: ?Sized,
    F: Fn(u32, &E) + Send + Sync,
{
    fn on_attempt_failed(&self, attempt: u32, error: &E) {
        (self.on_failure)(attempt, error)
    }
}

/// Implement RetryObserver for Arc<T> where T: RetryObserver
impl<E: ?Sized, T: RetryObserver<E> + ?Sized> RetryObserver<E> for std::sync::Arc<T> {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        (**self).on_attempt_start(attempt, max_attempts)
    }

    fn on_attempt_failed(&self, attempt: u32, error: &E) {
        (**self).on_attempt_failed(attempt, error)
    }

    fn on_success(&self, attempt: u32, total_duration: Duration) {
        (**self).on_success(attempt, total_duration)
    }
}

/// Implement RetryObserver for Box<T> where T: RetryObserver
impl<E: ?Sized, T: RetryObserver<E> + ?Sized> RetryObserver<E> for Box<T> {
    fn on_attempt_start(&self, attempt: u32, max_attempts: u32) {
        (**self).on_attempt_start(attempt, max_attempts)
    }

    fn on_attempt_failed(&self, attempt: u32, error: &E) {
        (**self).on_attempt_failed(attempt, error)
    }

    fn on_success(&self, attempt: u32, total_duration: Duration) {
        (**self).on_success(attempt, total_duration)
    }
}
