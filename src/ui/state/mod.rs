// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains all the scroll, animation and disclosure state logic
//! separated from the main App struct, following the principle of separation
//! of concerns.

pub mod counter;
pub mod faq;
pub mod mobile_nav;
pub mod reveal;
pub mod scroll;
pub mod scroll_animation;

// Re-export commonly used types for convenience
pub use counter::StatCounter;
pub use faq::FaqAccordion;
pub use mobile_nav::MobileNav;
pub use reveal::{RevealSet, RevealState};
pub use scroll::ScrollState;
pub use scroll_animation::ScrollAnimation;
