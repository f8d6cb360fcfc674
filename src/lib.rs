// SPDX-License-Identifier: MPL-2.0
//! `iced_brief` is a bilingual single-page briefing app built with the Iced
//! GUI framework.
//!
//! It renders a scrollable compliance brief with animated section reveals and
//! demonstrates runtime language switching, user preference management, and
//! modular UI design.

#![doc(html_root_url = "https://docs.rs/iced_brief/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
