// SPDX-License-Identifier: MPL-2.0
//! FAQ accordion expansion state.
//!
//! At most one entry is open at a time. Activating a question toggles it:
//! the open entry collapses first, then the activated one expands unless it
//! was the one already open. Each entry carries an `aria-expanded` mirror
//! for assistive readout, rewritten on every transition.

/// Expansion state of the FAQ accordion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    expanded: Option<usize>,
    aria_expanded: Vec<bool>,
}

impl FaqAccordion {
    #[must_use]
    pub fn new(entry_count: usize) -> Self {
        Self {
            expanded: None,
            aria_expanded: vec![false; entry_count],
        }
    }

    /// Handles a question activation.
    ///
    /// The open entry always collapses first; the activated entry then
    /// expands unless it was the open one. Activations outside the entry
    /// list are ignored.
    pub fn activate(&mut self, index: usize) {
        if index >= self.aria_expanded.len() {
            return;
        }
        let was_open = self.expanded == Some(index);
        self.expanded = if was_open { None } else { Some(index) };
        self.sync_mirror();
    }

    fn sync_mirror(&mut self) {
        for (index, mirror) in self.aria_expanded.iter_mut().enumerate() {
            *mirror = self.expanded == Some(index);
        }
    }

    /// The index of the open entry, if any.
    #[must_use]
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    #[must_use]
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// The entry's accessibility mirror of its expansion.
    #[must_use]
    pub fn aria_expanded(&self, index: usize) -> bool {
        self.aria_expanded.get(index).copied().unwrap_or(false)
    }
}
