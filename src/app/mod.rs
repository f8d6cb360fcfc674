// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page blocks.
//!
//! The `App` struct wires together the bilingual document, the scroll model
//! and the animation states, and translates messages into side effects like
//! config persistence or programmatic scrolling. This file intentionally
//! keeps policy decisions (minimum window size, persistence rules, language
//! switching) close to the main update loop so it is easy to audit
//! user-facing behavior.

mod message;
pub mod paths;
mod persistence;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content::Page;
use crate::i18n::{resolve_startup_locale, StartupLocale};
use crate::ui::geometry::PageGeometry;
use crate::ui::state::{
    FaqAccordion, MobileNav, RevealSet, ScrollAnimation, ScrollState, StatCounter,
};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state that bridges the document, the scroll model,
/// and the animation state machines.
pub struct App {
    page: Page,
    config: Config,
    /// Last known logical window size; the layout model is computed from it.
    window: Size,
    geometry: PageGeometry,
    scroll: ScrollState,
    /// Live smooth-scroll tween, when a section link was activated.
    scroll_animation: Option<ScrollAnimation>,
    reveals: RevealSet,
    counter: StatCounter,
    faq: FaqAccordion,
    mobile_nav: MobileNav,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("lang", &self.page.lang)
            .field("scroll_offset", &self.scroll.offset())
            .field("drawer_open", &self.mobile_nav.drawer_open())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
// The minimum width sits below the mobile breakpoint so the compact layout
// stays reachable by resizing.
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from `Flags`, applying the startup
    /// language decision to the document.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut config = config::load().unwrap_or_else(|error| {
            eprintln!("Failed to load config: {:?}", error);
            Config::default()
        });
        let mut page = flags.page;

        match resolve_startup_locale(flags.lang.as_deref(), &config) {
            // A launcher override is not a user preference, so it skips the
            // persisting switch path.
            StartupLocale::Override(locale) => page.switch_locale(locale),
            StartupLocale::Saved(locale) | StartupLocale::Detected(locale) => {
                persistence::apply_language_change(&mut page, &mut config, locale);
            }
            StartupLocale::DefaultAuthored => {}
        }

        // The real size arrives with the first resize event.
        let window = Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32);
        let geometry = PageGeometry::compute(&page, window, None);
        let reveals = RevealSet::new(page.card_count());
        let faq = FaqAccordion::new(page.faq.entries.len());

        let mut app = App {
            page,
            config,
            window,
            geometry,
            scroll: ScrollState::default(),
            scroll_animation: None,
            reveals,
            counter: StatCounter::default(),
            faq,
            mobile_nav: MobileNav::default(),
        };

        // A window tall enough to show the first cards at offset zero should
        // start their entrance right away.
        let mut ctx = app.context();
        update::evaluate_visibility(&mut ctx);

        (app, Task::none())
    }

    fn context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            page: &mut self.page,
            config: &mut self.config,
            window: &mut self.window,
            geometry: &mut self.geometry,
            scroll: &mut self.scroll,
            scroll_animation: &mut self.scroll_animation,
            reveals: &mut self.reveals,
            counter: &mut self.counter,
            faq: &mut self.faq,
            mobile_nav: &mut self.mobile_nav,
        }
    }

    fn title(&self) -> String {
        self.page.window_title().to_owned()
    }

    fn theme(&self) -> Theme {
        // The brief is authored against its own navy palette.
        Theme::Dark
    }

    fn has_active_animation(&self) -> bool {
        self.scroll_animation.is_some()
            || self.reveals.any_animating()
            || self.counter.is_running()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.has_active_animation());
        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.context();

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Faq(faq_message) => update::handle_faq_message(&mut ctx, faq_message),
            Message::Footer(footer_message) => {
                update::handle_footer_message(&mut ctx, footer_message)
            }
            Message::Scrolled(offset) => update::handle_scrolled(&mut ctx, offset),
            Message::WindowResized(size) => update::handle_resized(&mut ctx, size),
            Message::Tick(_instant) => update::handle_tick(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            page: &self.page,
            locale: self.page.lang,
            window: self.window,
            scroll: &self.scroll,
            reveals: &self.reveals,
            counter: &self.counter,
            faq: &self.faq,
            mobile_nav: &self.mobile_nav,
        })
    }
}
