// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of blocks with the navigation bar
//! stacked on top, so the bar stays pinned while the content moves.

use super::Message;
use crate::content::Page;
use crate::i18n::Locale;
use crate::ui::design_tokens::sizing;
use crate::ui::faq::{self, ViewContext as FaqViewContext};
use crate::ui::footer::{self, ViewContext as FooterViewContext};
use crate::ui::hero::{self, ViewContext as HeroViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::sections::{self, ViewContext as SectionsViewContext};
use crate::ui::state::{FaqAccordion, MobileNav, RevealSet, ScrollState, StatCounter};
use iced::{
    widget::{Column, Container, Id, Scrollable, Stack},
    Element, Length, Size,
};

/// Widget id of the page scrollable, shared with the programmatic scroll.
pub const SCROLLABLE_ID: &str = "page-scrollable";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub page: &'a Page,
    pub locale: Locale,
    pub window: Size,
    pub scroll: &'a ScrollState,
    pub reveals: &'a RevealSet,
    pub counter: &'a StatCounter,
    pub faq: &'a FaqAccordion,
    pub mobile_nav: &'a MobileNav,
}

/// Renders the whole brief.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let compact = ctx.window.width < sizing::MOBILE_BREAKPOINT;
    let columns = if compact {
        sizing::GRID_COLUMNS_NARROW
    } else {
        sizing::GRID_COLUMNS_WIDE
    };

    let content = Column::new()
        .width(Length::Fill)
        .push(
            hero::view(HeroViewContext {
                page: ctx.page,
                height: ctx.window.height,
                parallax_shift: ctx.scroll.parallax_shift(),
            })
            .map(Message::Hero),
        )
        .push(sections::view(SectionsViewContext {
            page: ctx.page,
            reveals: ctx.reveals,
            counter: ctx.counter,
            columns,
        }))
        .push(
            faq::view(FaqViewContext {
                page: ctx.page,
                accordion: ctx.faq,
            })
            .map(Message::Faq),
        )
        .push(footer::view(FooterViewContext { page: ctx.page }).map(Message::Footer));

    let scroll_layer = Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport| Message::Scrolled(viewport.absolute_offset()));

    let drawer_open = compact && ctx.mobile_nav.drawer_open();
    let nav_layer = Container::new(
        navbar::view(NavbarViewContext {
            page: ctx.page,
            locale: ctx.locale,
            scrolled: ctx.scroll.nav_scrolled(),
            compact,
            drawer_open: ctx.mobile_nav.drawer_open(),
        })
        .map(Message::Navbar),
    )
    .width(Length::Fill)
    .height(if drawer_open {
        Length::Fill
    } else {
        Length::Shrink
    });

    Stack::new().push(scroll_layer).push(nav_layer).into()
}
