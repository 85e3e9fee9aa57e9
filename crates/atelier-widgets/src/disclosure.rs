#![forbid(unsafe_code)]

//! Single-open disclosure list with optional windowed pagination.
//!
//! Used for the FAQ accordion (paginated, four rows at a time) and the
//! services list (unpaginated).
//!
//! # Invariants
//!
//! 1. At most one item is open.
//! 2. The open item, if any, is inside [`DisclosureList::visible_slice`].
//! 3. When paginated, `0 <= window_start <= len - window_size`; otherwise
//!    `window_start == 0`.
//! 4. Moving the window always closes the open item.
//!
//! # Failure Modes
//!
//! None. Out-of-range or off-window toggles and paging past either end are
//! no-ops that return `false`.

use std::ops::Range;

use atelier_core::event::{KeyCode, KeyEvent};

/// One row: a collapsed summary and an expandable detail body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureItem<I = usize> {
    pub id: I,
    pub summary: String,
    pub detail: String,
}

impl<I> DisclosureItem<I> {
    #[must_use]
    pub fn new(id: I, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            id,
            summary: summary.into(),
            detail: detail.into(),
        }
    }
}

/// State for a single-open disclosure list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisclosureList<I = usize> {
    items: Vec<DisclosureItem<I>>,
    open: Option<usize>,
    window_size: Option<usize>,
    window_start: usize,
}

impl<I> DisclosureList<I> {
    /// Unpaginated list; every item is visible.
    #[must_use]
    pub fn new(items: impl IntoIterator<Item = DisclosureItem<I>>) -> Self {
        Self {
            items: items.into_iter().collect(),
            open: None,
            window_size: None,
            window_start: 0,
        }
    }

    /// List showing `window_size` items at a time. A zero window disables
    /// pagination.
    #[must_use]
    pub fn paginated(items: impl IntoIterator<Item = DisclosureItem<I>>, window_size: usize) -> Self {
        let mut list = Self::new(items);
        list.window_size = (window_size > 0).then_some(window_size);
        list
    }

    #[must_use]
    pub fn items(&self) -> &[DisclosureItem<I>] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn window_size(&self) -> Option<usize> {
        self.window_size
    }

    #[must_use]
    pub fn window_start(&self) -> usize {
        self.window_start
    }

    /// Largest valid `window_start`.
    #[must_use]
    pub fn max_window_start(&self) -> usize {
        match self.window_size {
            Some(size) => self.items.len().saturating_sub(size),
            None => 0,
        }
    }

    /// Backing-list indices currently visible.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        match self.window_size {
            Some(size) => {
                let end = self.window_start.saturating_add(size).min(self.items.len());
                self.window_start..end
            }
            None => 0..self.items.len(),
        }
    }

    /// Items currently visible.
    #[must_use]
    pub fn visible_slice(&self) -> &[DisclosureItem<I>] {
        &self.items[self.visible_range()]
    }

    /// Backing index of the open item.
    #[must_use]
    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn open_item(&self) -> Option<&DisclosureItem<I>> {
        self.open.and_then(|i| self.items.get(i))
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index` (closing any other), or close it if it is already open.
    ///
    /// `index` is a backing-list index and must be visible.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.visible_range().contains(&index) {
            return false;
        }
        #[cfg(feature = "tracing")]
        let before = self.open;
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        #[cfg(feature = "tracing")]
        Self::log_change("toggle", before, self.open, self.window_start);
        true
    }

    /// Toggle by position within the visible slice.
    pub fn toggle_visible(&mut self, position: usize) -> bool {
        self.toggle(self.window_start.saturating_add(position))
    }

    /// Close whatever is open. Returns `false` if nothing was.
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    #[must_use]
    pub fn can_page_up(&self) -> bool {
        self.window_size.is_some() && self.window_start > 0
    }

    #[must_use]
    pub fn can_page_down(&self) -> bool {
        self.window_size.is_some() && self.window_start < self.max_window_start()
    }

    /// Shift the window back by one item and close the open item.
    pub fn page_up(&mut self) -> bool {
        if !self.can_page_up() {
            return false;
        }
        #[cfg(feature = "tracing")]
        let before = self.open;
        self.window_start -= 1;
        self.open = None;
        #[cfg(feature = "tracing")]
        Self::log_change("page_up", before, self.open, self.window_start);
        true
    }

    /// Shift the window forward by one item and close the open item.
    pub fn page_down(&mut self) -> bool {
        if !self.can_page_down() {
            return false;
        }
        #[cfg(feature = "tracing")]
        let before = self.open;
        self.window_start += 1;
        self.open = None;
        #[cfg(feature = "tracing")]
        Self::log_change("page_down", before, self.open, self.window_start);
        true
    }

    /// Keyboard handling.
    ///
    /// Supported:
    /// - `PageUp` / `PageDown`: move the window
    /// - `Enter` / `Space`: toggle the row at visible position `focused`
    pub fn handle_key(&mut self, key: &KeyEvent, focused: Option<usize>) -> bool {
        if !key.is_press() {
            return false;
        }
        match key.code {
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Enter | KeyCode::Char(' ') => match focused {
                Some(position) => self.toggle_visible(position),
                None => false,
            },
            _ => false,
        }
    }

    #[cfg(feature = "tracing")]
    fn log_change(reason: &str, from: Option<usize>, to: Option<usize>, window_start: usize) {
        tracing::debug!(
            message = "disclosure.change",
            reason,
            from = ?from,
            to = ?to,
            window_start
        );
    }
}

impl<I: PartialEq> DisclosureList<I> {
    /// Toggle the item with `id`. Returns `false` if no visible item has it.
    pub fn toggle_id(&mut self, id: &I) -> bool {
        match self.items.iter().position(|item| &item.id == id) {
            Some(index) => self.toggle(index),
            None => false,
        }
    }
}
