// SPDX-License-Identifier: MPL-2.0
//! Page footer: tagline, quick links and the copyright line.

use crate::content::{Link, Page, SectionId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub page: &'a Page,
}

/// Messages emitted by the footer.
#[derive(Debug, Clone)]
pub enum Message {
    /// A quick link was activated; `None` marks an inert link.
    LinkPressed(Option<SectionId>),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Navigate(SectionId),
}

/// Process a footer message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::LinkPressed(Some(section)) => Event::Navigate(section),
        Message::LinkPressed(None) => Event::None,
    }
}

/// Render the footer.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let footer = &ctx.page.footer;

    let mut links = Row::new().spacing(spacing::LG);
    for link in &footer.links {
        links = links.push(build_link(link));
    }

    let body = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new(footer.tagline.rendered.as_str())
                .size(typography::BODY_LG)
                .color(palette::GRAY_100),
        )
        .push(links)
        .push(
            Text::new(footer.copyright.rendered.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

    Container::new(body)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::FOOTER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::footer)
        .into()
}

fn build_link<'a>(link: &'a Link) -> Element<'a, Message> {
    button(
        Text::new(link.label.rendered.as_str())
            .size(typography::CAPTION)
            .color(palette::GRAY_100),
    )
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::nav_link)
    .on_press(Message::LinkPressed(link.target))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::page::test_support::sample_page;

    #[test]
    fn footer_link_navigates_to_its_section() {
        let event = update(Message::LinkPressed(Some(SectionId::Risks)));
        assert!(matches!(event, Event::Navigate(SectionId::Risks)));
    }

    #[test]
    fn inert_footer_link_does_nothing() {
        let event = update(Message::LinkPressed(None));
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn footer_view_renders() {
        let page = sample_page();
        let _element = view(ViewContext { page: &page });
    }
}
