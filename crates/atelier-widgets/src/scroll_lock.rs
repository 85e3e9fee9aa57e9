#![forbid(unsafe_code)]

//! Page-level scroll lock with scrollbar compensation.
//!
//! While any overlay holds the lock, page overflow is hidden. Hiding the
//! scrollbar would shift fixed chrome sideways by the scrollbar width, so
//! that chrome receives an equal right padding for as long as the lock is
//! held. When the last holder releases, the padding goes back to zero in a
//! single step: the host must not animate that change or the header visibly
//! slides.
//!
//! # Invariants
//!
//! 1. `holders()` equals the number of live [`ScrollLockGuard`]s.
//! 2. Overflow is hidden iff `holders() > 0`.
//! 3. Padding is `scrollbar_width` while locked and `0.0` otherwise.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

/// Styles the host applies to the page body and fixed chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyStyle {
    pub overflow_hidden: bool,
    /// Right padding for fixed chrome, in CSS pixels.
    pub padding_right: f32,
    /// Whether the host may transition `padding_right` to its new value.
    /// Always `false` right after the final release.
    pub animate_padding: bool,
}

impl BodyStyle {
    pub const UNLOCKED: Self = Self {
        overflow_hidden: false,
        padding_right: 0.0,
        animate_padding: true,
    };
}

impl Default for BodyStyle {
    fn default() -> Self {
        Self::UNLOCKED
    }
}

#[derive(Debug)]
struct LockInner {
    holders: usize,
    scrollbar_width: f32,
    style: BodyStyle,
}

impl LockInner {
    fn restyle(&mut self) {
        self.style = if self.holders > 0 {
            BodyStyle {
                overflow_hidden: true,
                padding_right: self.scrollbar_width,
                animate_padding: false,
            }
        } else {
            BodyStyle {
                animate_padding: false,
                ..BodyStyle::UNLOCKED
            }
        };
    }
}

/// Shared, reference-counted scroll lock.
///
/// Cloning yields another handle to the same lock.
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<RefCell<LockInner>>,
}

impl fmt::Debug for ScrollLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ScrollLock")
            .field("holders", &inner.holders)
            .field("scrollbar_width", &inner.scrollbar_width)
            .finish()
    }
}

impl Default for ScrollLock {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl ScrollLock {
    /// Lock compensating for a scrollbar `scrollbar_width` pixels wide.
    #[must_use]
    pub fn new(scrollbar_width: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LockInner {
                holders: 0,
                scrollbar_width: scrollbar_width.max(0.0),
                style: BodyStyle::UNLOCKED,
            })),
        }
    }

    /// Update the measured scrollbar width (viewport width minus client
    /// width). Takes effect immediately if the lock is held.
    pub fn set_scrollbar_width(&self, width: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.scrollbar_width = width.max(0.0);
        if inner.holders > 0 {
            inner.restyle();
        }
    }

    #[must_use]
    pub fn scrollbar_width(&self) -> f32 {
        self.inner.borrow().scrollbar_width
    }

    /// Take a hold on the lock.
    #[must_use = "dropping the guard releases the lock"]
    pub fn acquire(&self) -> ScrollLockGuard {
        let mut inner = self.inner.borrow_mut();
        inner.holders += 1;
        if inner.holders == 1 {
            inner.restyle();
            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "scroll_lock.lock",
                padding_right = inner.scrollbar_width
            );
        }
        ScrollLockGuard {
            lock: Rc::downgrade(&self.inner),
        }
    }

    #[must_use]
    pub fn holders(&self) -> usize {
        self.inner.borrow().holders
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    /// Current styles for the host to apply.
    #[must_use]
    pub fn body_style(&self) -> BodyStyle {
        self.inner.borrow().style
    }
}

/// RAII hold on a [`ScrollLock`]. Dropping it releases the hold.
pub struct ScrollLockGuard {
    lock: Weak<RefCell<LockInner>>,
}

impl fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("live", &(self.lock.strong_count() > 0))
            .finish()
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let Some(inner) = self.lock.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        inner.holders = inner.holders.saturating_sub(1);
        if inner.holders == 0 {
            inner.restyle();
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "scroll_lock.unlock");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlocked_by_default() {
        let lock = ScrollLock::new(15.0);
        assert!(!lock.is_locked());
        assert_eq!(lock.body_style(), BodyStyle::UNLOCKED);
    }

    #[test]
    fn acquire_hides_overflow_and_pads() {
        let lock = ScrollLock::new(15.0);
        let _guard = lock.acquire();
        let style = lock.body_style();
        assert!(style.overflow_hidden);
        assert_eq!(style.padding_right, 15.0);
    }

    #[test]
    fn release_removes_padding_without_animation() {
        let lock = ScrollLock::new(15.0);
        let guard = lock.acquire();
        drop(guard);
        let style = lock.body_style();
        assert!(!style.overflow_hidden);
        assert_eq!(style.padding_right, 0.0);
        assert!(!style.animate_padding);
    }

    #[test]
    fn nested_holders_keep_lock() {
        let lock = ScrollLock::new(12.0);
        let a = lock.acquire();
        let b = lock.clone().acquire();
        assert_eq!(lock.holders(), 2);
        drop(a);
        assert!(lock.is_locked());
        assert_eq!(lock.body_style().padding_right, 12.0);
        drop(b);
        assert!(!lock.is_locked());
    }

    #[test]
    fn width_update_applies_while_locked() {
        let lock = ScrollLock::new(0.0);
        let _guard = lock.acquire();
        lock.set_scrollbar_width(17.0);
        assert_eq!(lock.body_style().padding_right, 17.0);
    }

    #[test]
    fn negative_width_clamps() {
        let lock = ScrollLock::new(-4.0);
        assert_eq!(lock.scrollbar_width(), 0.0);
    }

    #[test]
    fn guard_outliving_lock_is_harmless() {
        let lock = ScrollLock::new(10.0);
        let guard = lock.acquire();
        drop(lock);
        drop(guard);
    }
}
