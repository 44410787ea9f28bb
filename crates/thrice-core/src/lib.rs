//! # thrice-core
//!
//! Core library for the thrice CLI providing:
//! - Bounded retry invocation (`invoke_with_retry`, `RetryingInvoker`)
//! - Delimited list conversion
//! - Slice swap and tuple sorting helpers
//! - A once-initialised process-wide instance holder
//! - Predicate composition
//! - Runtime configuration types and a hierarchical loader

pub mod config;
pub mod convert;
pub mod error;
pub mod predicate;
pub mod retry;
pub mod singleton;
pub mod slice;
pub mod types;

pub use config::ConfigLoader;
pub use error::{Error, Result};
pub use retry::{invoke_with_retry, RetryExhausted, RetryInvoke, RetryingInvoker};
pub use types::{RetryPolicy, ThriceConfig};
