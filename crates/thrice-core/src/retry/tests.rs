//! Flow tests for the retry module
//!
//! These tests drive scripted operations through the invoker and check the
//! returned value, the propagated cause and what reached the sink.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::retry::error::RetryExhausted;
use crate::retry::executor::{invoke_with_retry, RetryingInvoker, RetryingInvokerBuilder};
use crate::retry::observer::{ClosureObserver, NoOpObserver, RecordingObserver};
use crate::types::RetryPolicy;

type Recorder = Arc<RecordingObserver<String>>;

/// An invoker with the default policy that records every reported failure
fn recording_invoker() -> (RetryingInvoker<Recorder>, Recorder) {
    let observer: Recorder = Arc::new(RecordingObserver::new());
    let invoker = RetryingInvokerBuilder::new()
        .with_observer(observer.clone())
        .build();
    (invoker, observer)
}

/// An operation that replays a fixed sequence of outcomes, one per call
fn scripted<T: Clone>(
    outcomes: Vec<Result<T, &'static str>>,
) -> (impl FnMut() -> Result<T, String>, Arc<AtomicU32>) {
    let calls = Arc::new(AtomicU32::new(0));
    let counter = calls.clone();
    let mut queue: VecDeque<_> = outcomes.into();
    let op = move || {
        counter.fetch_add(1, Ordering::SeqCst);
        match queue.pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(cause)) => Err(cause.to_string()),
            None => Err("operation called too many times".to_string()),
        }
    };
    (op, calls)
}

// ============================================================================
// Attempt Sequences
// ============================================================================

#[test]
fn test_first_attempt_success_never_touches_sink() {
    let (invoker, observer) = recording_invoker();
    let (op, calls) = scripted(vec![Ok(7)]);

    assert_eq!(invoker.execute(op).unwrap(), 7);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(observer.failures().is_empty());
}

#[test]
fn test_one_failure_then_success() {
    let (invoker, observer) = recording_invoker();
    let (op, calls) = scripted(vec![Err("first"), Ok(2)]);

    assert_eq!(invoker.execute(op).unwrap(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(observer.failures(), vec!["first".to_string()]);
}

#[test]
fn test_success_on_third_attempt_counts_as_real_try() {
    let (invoker, observer) = recording_invoker();
    let (op, calls) = scripted(vec![Err("timeout"), Err("timeout"), Ok(42)]);

    assert_eq!(invoker.execute(op).unwrap(), 42);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(
        observer.failures(),
        vec!["timeout".to_string(), "timeout".to_string()]
    );
}

#[test]
fn test_exhaustion_propagates_last_cause_unchanged() {
    let (invoker, observer) = recording_invoker();
    let (op, calls) = scripted::<u32>(vec![Err("A"), Err("B"), Err("C")]);

    let err = invoker.execute(op).unwrap_err();

    assert_eq!(err, RetryExhausted::new("C".to_string()));
    assert_eq!(err.into_source(), "C");
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(observer.failures(), vec!["A".to_string(), "B".to_string()]);
}

#[test]
fn test_no_fourth_attempt() {
    let (invoker, _observer) = recording_invoker();
    let (op, calls) = scripted::<u32>(vec![Err("A"), Err("B"), Err("C"), Ok(1)]);

    assert!(invoker.execute(op).is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_propagated_error_keeps_identity() {
    #[derive(Debug, Clone, PartialEq)]
    struct Failure {
        attempt: u32,
        code: u16,
    }

    impl std::fmt::Display for Failure {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "attempt {} failed with {}", self.attempt, self.code)
        }
    }

    let mut attempt = 0;
    let result: Result<(), _> = invoke_with_retry(|| {
        attempt += 1;
        Err(Failure {
            attempt,
            code: 500 + attempt as u16,
        })
    });

    assert_eq!(
        result.unwrap_err().into_source(),
        Failure {
            attempt: 3,
            code: 503
        }
    );
}

// ============================================================================
// Invoker Reuse
// ============================================================================

#[test]
fn test_repeated_invocations_share_no_state() {
    let (invoker, observer) = recording_invoker();

    let first = invoker.execute(|| Ok::<_, String>("pure"));
    let second = invoker.execute(|| Ok::<_, String>("pure"));

    assert_eq!(first, second);
    assert_eq!(observer.attempt_starts(), 2);
    assert_eq!(observer.successes(), 2);
}

#[test]
fn test_attempt_budget_resets_between_invocations() {
    let (invoker, observer) = recording_invoker();

    let (op, _) = scripted(vec![Err("x"), Err("y"), Ok(1)]);
    assert_eq!(invoker.execute(op).unwrap(), 1);

    // A fresh call gets a full budget of three attempts again
    let (op, calls) = scripted(vec![Err("p"), Err("q"), Ok(2)]);
    assert_eq!(invoker.execute(op).unwrap(), 2);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(observer.failure_count(), 4);
}

#[test]
fn test_independent_invocations_across_threads() {
    let invoker = Arc::new(
        RetryingInvokerBuilder::new()
            .with_observer(NoOpObserver)
            .build(),
    );

    let handles: Vec<_> = (0..4u32)
        .map(|id| {
            let invoker = invoker.clone();
            thread::spawn(move || {
                let mut attempts = 0;
                invoker.execute(|| {
                    attempts += 1;
                    if attempts < 3 {
                        Err(format!("worker {} attempt {}", id, attempts))
                    } else {
                        Ok(id * 10)
                    }
                })
            })
        })
        .collect();

    let results: Vec<u32> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().unwrap())
        .collect();

    assert_eq!(results, vec![0, 10, 20, 30]);
}

// ============================================================================
// Observers
// ============================================================================

#[test]
fn test_closure_observer_receives_attempt_numbers() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = log.clone();
    let invoker = RetryingInvokerBuilder::new()
        .with_observer(ClosureObserver::new(move |attempt: u32, err: &String| {
            sink.lock().unwrap().push((attempt, err.clone()));
        }))
        .build();

    let (op, _) = scripted::<u32>(vec![Err("A"), Err("B"), Err("C")]);
    assert!(invoker.execute(op).is_err());

    assert_eq!(
        *log.lock().unwrap(),
        vec![(1, "A".to_string()), (2, "B".to_string())]
    );
}

#[test]
fn test_custom_policy_with_recording_observer() {
    let observer = Arc::new(RecordingObserver::<String>::new());
    let invoker = RetryingInvokerBuilder::new()
        .with_policy(RetryPolicy::new(2).unwrap())
        .with_observer(observer.clone())
        .build();

    let (op, calls) = scripted::<u32>(vec![Err("A"), Err("B"), Ok(3)]);
    let err = invoker.execute(op).unwrap_err();

    assert_eq!(err.into_source(), "B");
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(observer.failures(), vec!["A".to_string()]);
}
