#![forbid(unsafe_code)]

//! Page-global listener bookkeeping.
//!
//! Components that need page-global input (Escape key, pointer-down outside
//! a panel) register interest here instead of receiving every event. The
//! host routes those events only to owners that are currently attached.
//!
//! Attaching returns a [`ListenerGuard`]; dropping the guard detaches. A
//! component that stores its guards in state therefore cannot leak a
//! listener past its own teardown.
//!
//! # Invariants
//!
//! 1. Each guard corresponds to exactly one registry entry.
//! 2. Dropping a guard removes its entry immediately.
//! 3. `owners()` reports owners in attach order.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::event::SurfaceId;

/// Kind of page-global listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Key presses anywhere on the page.
    Keyboard,
    /// Pointer or touch starts outside the owner's surface.
    OutsidePointer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    id: u64,
    kind: ListenerKind,
    owner: SurfaceId,
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Shared, single-threaded registry of attached listeners.
///
/// Cloning yields another handle to the same registry.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ListenerRegistry")
            .field("attached", &inner.entries.len())
            .finish()
    }
}

impl ListenerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a listener of `kind` on behalf of `owner`.
    #[must_use = "dropping the guard detaches the listener"]
    pub fn attach(&self, kind: ListenerKind, owner: SurfaceId) -> ListenerGuard {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.entries.push(Entry { id, kind, owner });
        tracing::trace!(message = "listener.attach", ?kind, owner = owner.raw(), id);
        ListenerGuard {
            registry: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Owners with an attached listener of `kind`, in attach order.
    #[must_use]
    pub fn owners(&self, kind: ListenerKind) -> Vec<SurfaceId> {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .map(|e| e.owner)
            .collect()
    }

    #[must_use]
    pub fn is_attached(&self, kind: ListenerKind, owner: SurfaceId) -> bool {
        self.inner
            .borrow()
            .entries
            .iter()
            .any(|e| e.kind == kind && e.owner == owner)
    }

    /// Number of attached listeners of `kind`.
    #[must_use]
    pub fn count(&self, kind: ListenerKind) -> usize {
        self.inner
            .borrow()
            .entries
            .iter()
            .filter(|e| e.kind == kind)
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }
}

/// RAII handle for an attached listener.
pub struct ListenerGuard {
    registry: std::rc::Weak<RefCell<RegistryInner>>,
    id: u64,
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("id", &self.id).finish()
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.registry.upgrade() {
            let mut inner = inner.borrow_mut();
            inner.entries.retain(|e| e.id != self.id);
            tracing::trace!(message = "listener.detach", id = self.id);
        }
    }
}
