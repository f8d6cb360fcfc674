// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::content::Page;
use crate::ui::faq;
use crate::ui::footer;
use crate::ui::hero;
use crate::ui::navbar;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Faq(faq::Message),
    Footer(footer::Message),
    /// The page scrollable reported a new absolute offset.
    Scrolled(AbsoluteOffset),
    /// The window was resized to this logical size.
    WindowResized(Size),
    Tick(Instant), // Periodic tick driving every animation
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `en`, `es-MX`).
    pub lang: Option<String>,
    /// The parsed page content, loaded before the event loop starts.
    pub page: Page,
}
