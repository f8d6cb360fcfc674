// SPDX-License-Identifier: MPL-2.0
//! Navigation bar and compact-layout drawer.
//!
//! The bar pins the brand, the section links and the language toggle to the
//! top of the page. Below the mobile breakpoint the links move into a
//! full-height drawer behind a hamburger button; activating a drawer link
//! closes the drawer before navigation starts.

use crate::content::{Link, Page, SectionId};
use crate::i18n::Locale;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::state::MobileNav;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navigation bar.
pub struct ViewContext<'a> {
    pub page: &'a Page,
    pub locale: Locale,
    /// Whether the page has scrolled past the styler threshold.
    pub scrolled: bool,
    /// Whether the window is below the mobile breakpoint.
    pub compact: bool,
    pub drawer_open: bool,
}

/// Messages emitted by the navigation bar.
#[derive(Debug, Clone)]
pub enum Message {
    /// A nav or drawer link was activated; `None` marks an inert link.
    LinkPressed(Option<SectionId>),
    LanguagePicked(Locale),
    ToggleDrawer,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(SectionId),
    SwitchLanguage(Locale),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, nav: &mut MobileNav) -> Event {
    match message {
        Message::LinkPressed(target) => {
            if nav.drawer_open() {
                nav.toggle();
            }
            match target {
                Some(section) => Event::Navigate(section),
                None => Event::None,
            }
        }
        Message::LanguagePicked(locale) => Event::SwitchLanguage(locale),
        Message::ToggleDrawer => {
            nav.toggle();
            Event::None
        }
    }
}

/// Render the navigation bar, plus the drawer when it is open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let bar = build_bar(&ctx);

    let mut content = Column::new().width(Length::Fill).push(bar);

    if ctx.compact && ctx.drawer_open {
        content = content.push(build_drawer(&ctx));
    }

    content.into()
}

/// Build the pinned bar itself.
fn build_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.page.meta.brand.rendered.as_str())
        .size(typography::TITLE_MD)
        .color(palette::GOLD_500);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::with_width(Length::Fill));

    if ctx.compact {
        row = row.push(build_language_toggle(ctx.locale));
        // No links means nothing for a drawer to hold.
        if !ctx.page.nav_links.is_empty() {
            row = row.push(build_hamburger(ctx.drawer_open));
        }
    } else {
        for link in &ctx.page.nav_links {
            row = row.push(build_nav_link(link, typography::BODY));
        }
        row = row.push(build_language_toggle(ctx.locale));
    }

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::navbar(ctx.scrolled))
        .into()
}

fn build_nav_link<'a>(link: &'a Link, size: f32) -> Element<'a, Message> {
    button(Text::new(link.label.rendered.as_str()).size(size))
        .style(styles::button::nav_link)
        .padding([spacing::XXS, spacing::XS])
        .on_press(Message::LinkPressed(link.target))
        .into()
}

/// Two-segment ES/EN toggle; the displayed language is highlighted.
fn build_language_toggle<'a>(current: Locale) -> Element<'a, Message> {
    let segment = |locale: Locale| {
        let label = Text::new(locale.short_code())
            .size(typography::CAPTION)
            .align_x(Horizontal::Center);

        let style = if locale == current {
            styles::button::selected
        } else {
            styles::button::unselected
        };

        button(label)
            .width(Length::Fixed(sizing::LANG_BADGE_WIDTH))
            .padding(spacing::XXS)
            .style(style)
            .on_press(Message::LanguagePicked(locale))
    };

    Row::new()
        .spacing(spacing::XXS)
        .push(segment(Locale::Es))
        .push(segment(Locale::En))
        .into()
}

fn build_hamburger<'a>(drawer_open: bool) -> Element<'a, Message> {
    let glyph = if drawer_open { "✕" } else { "☰" };

    button(
        Text::new(glyph)
            .size(typography::TITLE_MD)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fixed(sizing::HAMBURGER_SIZE))
    .height(Length::Fixed(sizing::HAMBURGER_SIZE))
    .style(styles::button::hamburger(drawer_open))
    .on_press(Message::ToggleDrawer)
    .into()
}

/// Build the full-height drawer listing the nav links vertically.
fn build_drawer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut links = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .width(Length::Fill);

    for link in &ctx.page.nav_links {
        links = links.push(build_nav_link(link, typography::TITLE_SM));
    }

    Container::new(links)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([spacing::XXL, spacing::LG])
        .style(styles::container::drawer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::page::test_support::sample_page;

    #[test]
    fn link_press_navigates() {
        let mut nav = MobileNav::default();
        let event = update(Message::LinkPressed(Some(SectionId::Risks)), &mut nav);
        assert!(matches!(event, Event::Navigate(SectionId::Risks)));
    }

    #[test]
    fn drawer_link_closes_the_drawer_before_navigating() {
        let mut nav = MobileNav::default();
        nav.toggle();

        let event = update(Message::LinkPressed(Some(SectionId::Faq)), &mut nav);

        assert!(!nav.drawer_open());
        assert!(matches!(event, Event::Navigate(SectionId::Faq)));
    }

    #[test]
    fn inert_link_still_closes_the_drawer() {
        let mut nav = MobileNav::default();
        nav.toggle();

        let event = update(Message::LinkPressed(None), &mut nav);

        assert!(!nav.drawer_open());
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn language_pick_is_forwarded() {
        let mut nav = MobileNav::default();
        let event = update(Message::LanguagePicked(Locale::En), &mut nav);
        assert!(matches!(event, Event::SwitchLanguage(Locale::En)));
    }

    #[test]
    fn hamburger_toggles_the_drawer() {
        let mut nav = MobileNav::default();

        let event = update(Message::ToggleDrawer, &mut nav);
        assert!(nav.drawer_open());
        assert!(matches!(event, Event::None));

        let _ = update(Message::ToggleDrawer, &mut nav);
        assert!(!nav.drawer_open());
    }

    #[test]
    fn navbar_view_renders() {
        let page = sample_page();
        let ctx = ViewContext {
            page: &page,
            locale: Locale::Es,
            scrolled: false,
            compact: false,
            drawer_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_compact_with_drawer_open() {
        let page = sample_page();
        let ctx = ViewContext {
            page: &page,
            locale: Locale::En,
            scrolled: true,
            compact: true,
            drawer_open: true,
        };
        let _element = view(ctx);
    }
}
