// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers behind the single
//! `App::update` entrypoint. Scroll position, the smooth-scroll tween, the
//! reveal and counter states and the page geometry all meet here: every
//! handler that moves one of them re-evaluates whatever depends on it.

use super::view::SCROLLABLE_ID;
use super::{persistence, Message};
use crate::config::Config;
use crate::content::{Page, SectionId};
use crate::i18n::Locale;
use crate::ui::design_tokens::{motion, sizing};
use crate::ui::faq::{self, Event as FaqEvent};
use crate::ui::footer::{self, Event as FooterEvent};
use crate::ui::geometry::PageGeometry;
use crate::ui::hero::{self, Event as HeroEvent};
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::state::{
    FaqAccordion, MobileNav, RevealSet, ScrollAnimation, ScrollState, StatCounter,
};
use iced::widget::scrollable::{AbsoluteOffset, RelativeOffset};
use iced::widget::{operation, Id};
use iced::{Size, Task};

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub page: &'a mut Page,
    pub config: &'a mut Config,
    pub window: &'a mut Size,
    pub geometry: &'a mut PageGeometry,
    pub scroll: &'a mut ScrollState,
    pub scroll_animation: &'a mut Option<ScrollAnimation>,
    pub reveals: &'a mut RevealSet,
    pub counter: &'a mut StatCounter,
    pub faq: &'a mut FaqAccordion,
    pub mobile_nav: &'a mut MobileNav,
}

/// Handles navigation bar messages.
pub fn handle_navbar_message(
    ctx: &mut UpdateContext<'_>,
    message: navbar::Message,
) -> Task<Message> {
    match navbar::update(message, ctx.mobile_nav) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(section) => start_section_scroll(ctx, section),
        NavbarEvent::SwitchLanguage(locale) => switch_language(ctx, locale),
    }
}

/// Handles hero messages.
pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    match hero::update(message) {
        HeroEvent::None => Task::none(),
        HeroEvent::Navigate(section) => start_section_scroll(ctx, section),
    }
}

/// Handles FAQ messages. An expansion change moves every block below the
/// accordion, so the geometry and the visibility triggers are re-evaluated.
pub fn handle_faq_message(ctx: &mut UpdateContext<'_>, message: faq::Message) -> Task<Message> {
    match faq::update(message, ctx.faq) {
        FaqEvent::None => Task::none(),
        FaqEvent::LayoutChanged => {
            recompute_geometry(ctx);
            evaluate_visibility(ctx);
            Task::none()
        }
    }
}

/// Handles footer messages.
pub fn handle_footer_message(
    ctx: &mut UpdateContext<'_>,
    message: footer::Message,
) -> Task<Message> {
    match footer::update(message) {
        FooterEvent::None => Task::none(),
        FooterEvent::Navigate(section) => start_section_scroll(ctx, section),
    }
}

/// Handles a new scroll offset reported by the page scrollable.
///
/// A reported offset that strays from a live tween's expected position means
/// the reader took over; the tween is dropped rather than fought.
pub fn handle_scrolled(ctx: &mut UpdateContext<'_>, offset: AbsoluteOffset) -> Task<Message> {
    if is_scroll_locked(ctx) {
        return Task::none();
    }

    let deviated = ctx.scroll_animation.as_ref().is_some_and(|animation| {
        (offset.y - animation.current_offset()).abs() > motion::SCROLL_CANCEL_DEVIATION
    });
    if deviated {
        *ctx.scroll_animation = None;
    }

    ctx.scroll.ingest(offset.y, ctx.window.height);
    evaluate_visibility(ctx);
    Task::none()
}

/// Handles a window resize: block positions and the grid column count both
/// depend on the window, so the geometry is rebuilt.
pub fn handle_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    *ctx.window = size;
    recompute_geometry(ctx);
    evaluate_visibility(ctx);
    Task::none()
}

/// Advances every animation by one fixed tick and drives the scrollable
/// toward a live tween's position. Wall-clock jitter between ticks is
/// absorbed rather than compensated; each state machine counts whole steps.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let step = motion::TICK_INTERVAL;
    ctx.reveals.advance(step);
    ctx.counter.advance(step);

    let Some(animation) = ctx.scroll_animation.as_mut() else {
        return Task::none();
    };
    animation.advance(step);
    let offset = animation.current_offset();
    if animation.is_complete() {
        *ctx.scroll_animation = None;
    }

    // The widget reports back through `Scrolled`, which ingests the offset.
    let max_offset = ctx.geometry.max_scroll();
    let relative_y = if max_offset > 0.0 {
        (offset / max_offset).clamp(0.0, 1.0)
    } else {
        0.0
    };
    operation::snap_to(
        Id::new(SCROLLABLE_ID),
        RelativeOffset {
            x: 0.0,
            y: relative_y,
        },
    )
}

/// Begins a smooth scroll from the current offset to `section`'s anchor.
/// Refused while the compact drawer locks the page.
pub fn start_section_scroll(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    if is_scroll_locked(ctx) {
        return Task::none();
    }
    let Some(target) = ctx.geometry.anchor_target(section) else {
        return Task::none();
    };
    *ctx.scroll_animation = Some(ScrollAnimation::start(ctx.scroll.offset(), target));
    Task::none()
}

fn switch_language(ctx: &mut UpdateContext<'_>, locale: Locale) -> Task<Message> {
    persistence::apply_language_change(ctx.page, ctx.config, locale);
    Task::none()
}

/// The drawer only exists below the breakpoint; a stale open flag after a
/// resize to a wide window must not keep the page frozen.
fn is_scroll_locked(ctx: &UpdateContext<'_>) -> bool {
    ctx.window.width < sizing::MOBILE_BREAKPOINT && ctx.mobile_nav.scroll_locked()
}

fn recompute_geometry(ctx: &mut UpdateContext<'_>) {
    *ctx.geometry = PageGeometry::compute(ctx.page, *ctx.window, ctx.faq.expanded());
}

/// Fires the reveal and counter triggers that the current offset has earned.
/// Both are one-way; re-evaluating never takes an animation back.
pub fn evaluate_visibility(ctx: &mut UpdateContext<'_>) {
    ctx.reveals.evaluate(ctx.geometry, ctx.scroll.offset());
    if ctx.geometry.stat_triggered(ctx.scroll.offset()) {
        if let Some((_, stat)) = ctx.page.stat() {
            ctx.counter.trigger(stat.value);
        }
    }
}
