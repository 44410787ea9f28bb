//! Retry execution
//!
//! This module provides the attempt loop, configured by a `RetryPolicy` and
//! reporting to a `RetryObserver`.

use std::fmt;
use std::time::Instant;

use crate::types::RetryPolicy;

use super::error::RetryExhausted;
use super::observer::{RetryObserver, TracingObserver};

/// Invoke an operation, retrying it up to 3 times in total
///
/// Each failure that is followed by another attempt is logged through a
/// `TracingObserver`. If the third attempt also fails, its error is returned
/// inside `RetryExhausted`.
///
/// # Example
///
/// ```rust
/// use thrice_core::retry::invoke_with_retry;
///
/// let result = invoke_with_retry(|| "42".parse::<u32>());
/// assert_eq!(result.unwrap(), 42);
/// ```
pub fn invoke_with_retry<F, T, E>(op: F) -> Result<T, RetryExhausted<E>>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    RetryingInvokerBuilder::new()
        .with_observer(TracingObserver::new("invoke"))
        .build()
        .execute(op)
}

/// Method-call form of [`invoke_with_retry`] for closures and functions
///
/// ```rust
/// use thrice_core::retry::RetryInvoke;
///
/// let fetch = || Ok::<_, std::io::Error>("payload");
/// assert_eq!(fetch.invoke_with_retry().unwrap(), "payload");
/// ```
pub trait RetryInvoke<T, E> {
    /// Invoke `self` with the default retry policy
    fn invoke_with_retry(self) -> Result<T, RetryExhausted<E>>;
}

impl<F, T, E> RetryInvoke<T, E> for F
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    fn invoke_with_retry(self) -> Result<T, RetryExhausted<E>> {
        invoke_with_retry(self)
    }
}

/// Builder for configuring a `RetryingInvoker`
///
/// # Example
///
/// ```rust
/// use thrice_core::retry::{RetryingInvokerBuilder, TracingObserver};
/// use thrice_core::types::RetryPolicy;
///
/// let invoker = RetryingInvokerBuilder::new()
///     .with_policy(RetryPolicy::new(5).unwrap())
///     .with_observer(TracingObserver::new("download"))
///     .build();
/// ```
pub struct RetryingInvokerBuilder<O = TracingObserver> {
    policy: RetryPolicy,
    observer: O,
}

impl Default for RetryingInvokerBuilder<TracingObserver> {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryingInvokerBuilder<TracingObserver> {
    /// Create a new builder with default settings
    pub fn new() -> Self {
        Self {
            policy: RetryPolicy::default(),
            observer: TracingObserver::default(),
        }
    }
}

impl<O> RetryingInvokerBuilder<O> {
    /// Set the retry policy
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the observer
    ///
    /// The observer receives the cause of every failed attempt that is
    /// retried.
    pub fn with_observer<O2>(self, observer: O2) -> RetryingInvokerBuilder<O2> {
        RetryingInvokerBuilder {
            policy: self.policy,
            observer,
        }
    }

    /// Build the invoker
    pub fn build(self) -> RetryingInvoker<O> {
        RetryingInvoker {
            policy: self.policy,
            observer: self.observer,
        }
    }
}

/// Runs operations with a bounded number of attempts
///
/// The invoker keeps no per-call state, so one instance can be reused (and
/// shared between threads) without attempt counts leaking between calls.
/// Use `RetryingInvokerBuilder` to create an instance.
#[derive(Debug, Clone)]
pub struct RetryingInvoker<O = TracingObserver> {
    policy: RetryPolicy,
    observer: O,
}

impl<O> RetryingInvoker<O> {
    /// The policy this invoker applies
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// The observer failed attempts are reported to
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Execute an operation with retry logic
    ///
    /// # Arguments
    ///
    /// * `op` - A closure invoked once per attempt
    ///
    /// # Returns
    ///
    /// The value of the first successful attempt, or `RetryExhausted` with
    /// the error of the last attempt once the policy's ceiling is reached.
    pub fn execute<F, T, E>(&self, mut op: F) -> Result<T, RetryExhausted<E>>
    where
        F: FnMut() -> Result<T, E>,
        O: RetryObserver<E>,
    {
        let start = Instant::now();
        let max_attempts = self.policy.max_attempts();
        let mut attempt = 1;

        loop {
            self.observer.on_attempt_start(attempt, max_attempts);

            match op() {
                Ok(value) => {
                    self.observer.on_success(attempt, start.elapsed());
                    return Ok(value);
                }
                // The last failure goes to the caller, not the observer
                Err(err) if attempt >= max_attempts => {
                    return Err(RetryExhausted::new(err));
                }
                Err(err) => {
                    self.observer.on_attempt_failed(attempt, &err);
                    attempt += 1;
                }
            }
        }
    }
}
