// SPDX-License-Identifier: MPL-2.0
//! Scroll position and the states derived from it.
//!
//! Every scroll viewport message lands here first; the navbar style and the
//! hero parallax shift are re-derived from the fresh offset.

use crate::ui::design_tokens::motion;

/// The page's scroll offset plus its derived presentation states.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    offset: f32,
    nav_scrolled: bool,
    parallax_shift: f32,
}

impl ScrollState {
    /// Records a new scroll offset and re-derives the dependent states.
    ///
    /// The parallax shift only tracks the offset while the hero is within a
    /// window height of view; past that the last shift is kept, not reset.
    pub fn ingest(&mut self, offset: f32, window_height: f32) {
        self.offset = offset;
        self.nav_scrolled = offset > motion::NAV_SCROLL_THRESHOLD;
        if offset < window_height {
            self.parallax_shift = offset * motion::PARALLAX_FACTOR;
        }
    }

    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether the navbar should render its solid, shadowed style.
    #[must_use]
    pub fn nav_scrolled(&self) -> bool {
        self.nav_scrolled
    }

    /// Vertical displacement of the hero backdrop.
    #[must_use]
    pub fn parallax_shift(&self) -> f32 {
        self.parallax_shift
    }
}
