//! Bounded retry invocation
//!
//! This module re-executes a fallible, zero-argument operation until it
//! succeeds or the attempt ceiling is reached (3 by default). Attempts run
//! back to back. Every failure counts toward the ceiling; there is no
//! classification of transient versus permanent errors.
//!
//! # Features
//!
//! - `invoke_with_retry` for the common case (3 attempts, tracing sink)
//! - `RetryInvoke` extension trait for calling it as a method on a closure
//! - `RetryingInvokerBuilder` for a custom policy or observer
//! - Observable failed attempts via the `RetryObserver` trait
//! - Built-in `TracingObserver`, `RecordingObserver` and `ClosureObserver`
//!
//! # Example
//!
//! ```rust
//! use thrice_core::retry::{invoke_with_retry, RetryExhausted};
//!
//! let mut calls = 0;
//! let result: Result<u32, RetryExhausted<String>> = invoke_with_retry(|| {
//!     calls += 1;
//!     if calls < 3 {
//!         Err(format!("attempt {} failed", calls))
//!     } else {
//!         Ok(42)
//!     }
//! });
//!
//! assert_eq!(result.unwrap(), 42);
//! ```

mod error;
mod executor;
mod observer;

pub use error::RetryExhausted;
pub use executor::{invoke_with_retry, RetryInvoke, RetryingInvoker, RetryingInvokerBuilder};
pub use observer::{
    ClosureObserver, NoOpObserver, RecordingObserver, RetryObserver, TracingObserver,
};

#[cfg(test)]
mod tests;
