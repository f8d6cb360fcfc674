// SPDX-License-Identifier: MPL-2.0
//! The compact-layout navigation drawer.
//!
//! Below the mobile breakpoint the nav links move into a full-height drawer
//! behind a hamburger button. The button's active look, the drawer's
//! visibility, and the page scroll lock are one state: a single toggle flips
//! all three, and nothing flips them individually.

/// State of the compact navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileNav {
    open: bool,
}

impl MobileNav {
    /// Flips the drawer between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Whether the drawer is showing its link list.
    #[must_use]
    pub fn drawer_open(&self) -> bool {
        self.open
    }

    /// Whether the hamburger renders its active (X) form.
    #[must_use]
    pub fn button_active(&self) -> bool {
        self.open
    }

    /// Whether page scrolling is suppressed behind the drawer.
    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.open
    }
}
