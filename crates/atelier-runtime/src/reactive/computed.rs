#![forbid(unsafe_code)]

//! Lazy computed values that update from [`Observable`] dependencies.
//!
//! [`Computed<T>`] wraps a compute function and its cached result in shared
//! storage. A change in the source marks the cache dirty; the next
//! [`get()`](Computed::get) recomputes.
//!
//! # Invariants
//!
//! 1. `get()` is consistent with the current state of the source.
//! 2. The compute function runs at most once per dependency change.
//! 3. Version increments by exactly 1 per recomputation.
//!
//! # Failure Modes
//!
//! - **Dependency dropped**: the subscription becomes inert; the last cached
//!   value is kept.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use super::observable::{Observable, Subscription};

struct ComputedInner<T> {
    compute: Box<dyn Fn() -> T>,
    cached: Option<T>,
    dirty: Rc<Cell<bool>>,
    version: u64,
    _subscription: Subscription,
}

impl<T> ComputedInner<T> {
    fn fresh(&mut self) -> &T {
        if self.dirty.replace(false) {
            self.cached = None;
        }
        if self.cached.is_none() {
            self.version += 1;
        }
        let compute = &self.compute;
        self.cached.get_or_insert_with(|| compute())
    }
}

/// A lazily evaluated, memoized value derived from observables.
///
/// Cloning a `Computed` creates a new handle to the **same** state.
pub struct Computed<T> {
    inner: Rc<RefCell<ComputedInner<T>>>,
}

impl<T> Clone for Computed<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Computed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Computed")
            .field("cached", &inner.cached)
            .field("dirty", &inner.dirty.get())
            .field("version", &inner.version)
            .finish()
    }
}

fn mark_dirty_on_change<S: Clone + PartialEq + 'static>(
    source: &Observable<S>,
    dirty: Weak<Cell<bool>>,
) -> Subscription {
    source.subscribe(move |_| {
        if let Some(flag) = dirty.upgrade() {
            flag.set(true);
        }
    })
}

impl<T: Clone + 'static> Computed<T> {
    /// Derive from a single observable.
    pub fn from_observable<S: Clone + PartialEq + 'static>(
        source: &Observable<S>,
        map: impl Fn(&S) -> T + 'static,
    ) -> Self {
        let dirty = Rc::new(Cell::new(true));
        let subscription = mark_dirty_on_change(source, Rc::downgrade(&dirty));
        let source = source.clone();
        Self {
            inner: Rc::new(RefCell::new(ComputedInner {
                compute: Box::new(move || source.with(|v| map(v))),
                cached: None,
                dirty,
                version: 0,
                _subscription: subscription,
            })),
        }
    }

    /// Current value, recomputing if a dependency changed.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow_mut().fresh().clone()
    }

    /// Borrow the current value without cloning.
    ///
    /// # Panics
    ///
    /// Panics if `f` calls back into this `Computed`.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let mut inner = self.inner.borrow_mut();
        f(inner.fresh())
    }

    #[must_use]
    pub fn is_dirty(&self) -> bool {
        let inner = self.inner.borrow();
        inner.dirty.get() || inner.cached.is_none()
    }

    /// Force the next `get()` to recompute.
    pub fn invalidate(&self) {
        self.inner.borrow().dirty.set(true);
    }

    /// Number of recomputations so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_dep_computed() {
        let source = Observable::new(10);
        let computed = Computed::from_observable(&source, |v| v * 2);
        assert_eq!(computed.get(), 20);
        assert_eq!(computed.version(), 1);

        source.set(5);
        assert!(computed.is_dirty());
        assert_eq!(computed.get(), 10);
        assert_eq!(computed.version(), 2);
    }

    #[test]
    fn memoizes_between_changes() {
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let source = Observable::new(1);
        let computed = Computed::from_observable(&source, move |v| {
            c.set(c.get() + 1);
            *v
        });
        let _ = computed.get();
        let _ = computed.get();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn with_borrows() {
        let source = Observable::new(String::from("linen"));
        let upper = Computed::from_observable(&source, |s| s.to_uppercase());
        assert_eq!(upper.with(String::len), 5);
    }

    #[test]
    fn invalidate_forces_recompute() {
        let source = Observable::new(1);
        let computed = Computed::from_observable(&source, |v| *v);
        let _ = computed.get();
        computed.invalidate();
        let _ = computed.get();
        assert_eq!(computed.version(), 2);
    }

    #[test]
    fn survives_source_drop() {
        let source = Observable::new(7);
        let computed = Computed::from_observable(&source, |v| *v + 1);
        assert_eq!(computed.get(), 8);
        drop(source);
        assert_eq!(computed.get(), 8);
    }
}
