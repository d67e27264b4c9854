//! Open/closed state of the accordion variants.
//!
//! Each widget instance owns one of these values and mutates it only
//! through `toggle`. Indices refer to positions in the item sequence the
//! widget currently renders. A stored index that no longer points at a
//! rendered row is kept as is and simply matches nothing, so the widget
//! renders that row as closed.

use std::collections::BTreeSet;

// ============================================================================
// Exclusive (basic, animated, nested top level)
// ============================================================================

/// At most one index open at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExclusiveState {
    open: Option<usize>,
}

impl ExclusiveState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open `index`, closing whatever was open, or close it if it already is.
    /// Returns the new open index.
    pub fn toggle(&mut self, index: usize) -> Option<usize> {
        self.open = if self.open == Some(index) { None } else { Some(index) };
        self.open
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    /// Drop the open index if it falls outside a sequence of `len` items.
    pub fn retain_within(&mut self, len: usize) {
        if self.open.is_some_and(|i| i >= len) {
            self.open = None;
        }
    }
}

// ============================================================================
// Multi
// ============================================================================

/// Any subset of indices open, each toggled independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiState {
    open: BTreeSet<usize>,
}

impl MultiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Flip membership of `index`. Returns whether it is open afterwards.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.open.remove(&index) {
            false
        } else {
            self.open.insert(index);
            true
        }
    }

    pub fn open_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.open.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn retain_within(&mut self, len: usize) {
        self.open.retain(|&i| i < len);
    }
}

// ============================================================================
// Nested
// ============================================================================

/// One open top-level section plus one open sub-section inside it.
///
/// The sub index is relative to whichever top-level item is open and is
/// cleared on every top-level toggle, including collapsing the same section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NestedState {
    top: ExclusiveState,
    sub: ExclusiveState,
}

impl NestedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn top_index(&self) -> Option<usize> {
        self.top.open_index()
    }

    pub fn sub_index(&self) -> Option<usize> {
        self.sub.open_index()
    }

    pub fn is_top_open(&self, index: usize) -> bool {
        self.top.is_open(index)
    }

    /// Whether sub-section `sub` of top-level section `top` is open.
    pub fn is_sub_open(&self, top: usize, sub: usize) -> bool {
        self.top.is_open(top) && self.sub.is_open(sub)
    }

    pub fn toggle_top(&mut self, index: usize) -> Option<usize> {
        let open = self.top.toggle(index);
        self.sub.close();
        open
    }

    /// Toggle a sub-section of the open top-level section. Ignored while no
    /// top-level section is open, since no sub header is rendered then.
    pub fn toggle_sub(&mut self, index: usize) -> Option<usize> {
        if self.top.open_index().is_none() {
            return None;
        }
        self.sub.toggle(index)
    }

    pub fn retain_within(&mut self, len: usize) {
        self.top.retain_within(len);
        if self.top.open_index().is_none() {
            self.sub.close();
        }
    }
}
