//! Process-wide instances that are created exactly once
//!
//! `Singleton<T>` is meant to live in a `static`. The value is built on first
//! access, even when several threads race for it, and every caller gets a
//! reference to the same instance afterwards.
//!
//! ```rust
//! use thrice_core::singleton::Singleton;
//!
//! #[derive(Default)]
//! struct Registry {
//!     name: String,
//! }
//!
//! static REGISTRY: Singleton<Registry> = Singleton::new();
//!
//! let a = REGISTRY.instance();
//! let b = REGISTRY.instance();
//! assert!(std::ptr::eq(a, b));
//! assert!(a.name.is_empty());
//! ```

use std::fmt;
use std::sync::OnceLock;

/// A lazily initialised, shared instance of `T`
pub struct Singleton<T> {
    cell: OnceLock<T>,
}

impl<T> Singleton<T> {
    /// Create an empty holder; usable in `static` items
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// The instance if it was already created
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    /// Return the instance, creating it with `init` on first access
    ///
    /// Only the first caller's initialiser runs.
    pub fn get_or_init_with<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(init)
    }

    /// Whether the instance has been created
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T: Default> Singleton<T> {
    /// Return the instance, creating it with `T::default()` on first access
    pub fn instance(&self) -> &T {
        self.cell.get_or_init(T::default)
    }
}

impl<T> Default for Singleton<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Singleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Singleton")
            .field("instance", &self.cell.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::thread;

    static CONSTRUCTIONS: AtomicU32 = AtomicU32::new(0);

    struct Service {
        id: u32,
    }

    impl Default for Service {
        fn default() -> Self {
            Self {
                id: CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst) + 1,
            }
        }
    }

    static SERVICE: Singleton<Service> = Singleton::new();

    #[test]
    fn test_same_instance_every_time() {
        let a = SERVICE.instance();
        let b = SERVICE.instance();
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_concurrent_first_access_initialises_once() {
        static SHARED: Singleton<Vec<u8>> = Singleton::new();
        let calls = AtomicU32::new(0);

        thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    SHARED.get_or_init_with(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        vec![1, 2, 3]
                    });
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(SHARED.get(), Some(&vec![1, 2, 3]));
    }

    #[test]
    fn test_get_does_not_initialise() {
        let holder: Singleton<String> = Singleton::new();
        assert!(holder.get().is_none());
        assert!(!holder.is_initialized());

        assert_eq!(holder.get_or_init_with(|| "first".to_string()), "first");
        assert_eq!(holder.get_or_init_with(|| "second".to_string()), "first");
        assert!(holder.is_initialized());
    }
}
