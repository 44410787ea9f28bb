//! Predicate composition
//!
//! ```rust
//! use thrice_core::predicate::{combine_predicates, Predicate};
//!
//! let in_range = combine_predicates(vec![
//!     Box::new(|x: &i32| *x > -10) as Predicate<i32>,
//!     Box::new(|x: &i32| *x < 10),
//! ]);
//!
//! assert!(in_range(&0));
//! assert!(!in_range(&10));
//! ```

/// A boxed, shareable test over `&T`
pub type Predicate<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Combine predicates with logical AND
///
/// The result holds only when every predicate holds. Predicates run left to
/// right and evaluation stops at the first one that fails. An empty list
/// gives a predicate that accepts everything.
pub fn combine_predicates<T: 'static>(predicates: Vec<Predicate<T>>) -> Predicate<T> {
    Box::new(move |value: &T| predicates.iter().all(|p| p(value)))
}

/// Combinators for closures used as predicates
pub trait PredicateExt<T>: Fn(&T) -> bool + Sized {
    /// Both `self` and `other` must hold; `other` is skipped when `self` fails
    fn and<P>(self, other: P) -> impl Fn(&T) -> bool
    where
        P: Fn(&T) -> bool,
    {
        move |value: &T| self(value) && other(value)
    }
}

impl<T, F> PredicateExt<T> for F where F: Fn(&T) -> bool {}
