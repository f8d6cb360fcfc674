// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Page Components
//!
//! - [`navbar`] - Navigation bar, language toggle and compact drawer
//! - [`hero`] - Full-height opening block with the parallax backdrop
//! - [`sections`] - Card sections with scroll reveals and the stat counter
//! - [`faq`] - Accordion of questions with a single open answer
//! - [`footer`] - Tagline, quick links and copyright
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Scroll, animation and disclosure state machines
//! - [`geometry`] - Vertical layout model shared by scroll math and views
//! - [`motion`] - Easing curves for tweened animations
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, motion)

pub mod design_tokens;
pub mod faq;
pub mod footer;
pub mod geometry;
pub mod hero;
pub mod motion;
pub mod navbar;
pub mod sections;
pub mod state;
pub mod styles;
